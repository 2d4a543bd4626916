// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction. Each spec knows *where the ground truth lives* in
//! one page section and how to read it robustly.
//!
//! ## What lives here
//! - **Pure HTML parsing** of saved page snapshots, through `core::html`
//!   helpers over a parsed `Document`.
//! - **Shape inference**: layouts picked by cell count, values pulled out by
//!   pattern where the markup carries no labels.
//! - **Row-level recovery**: a malformed row or nested table is skipped and
//!   reported as an `Issue`; it never takes the rest of the table down.
//!
//! ## What does **not** live here
//! - Fetching pages, logging in, sessions. Specs only see HTML text.
//! - Section isolation and the final merge (`engine`).
//! - Serialization and output (`cli`, `file`).
//!
//! ## Typical call chain
//! ```text
//! cli → engine::extract → specs::attendance::parse ─┐
//!                       → specs::marks::parse  ←────┘ (attendance records)
//!                       → specs::timetable::parse
//!                       → specs::profile::extract_with_fallback
//! ```
//!
//! ## Current specs
//! - `attendance` – the `#FAFAD2` table, full and frozen layouts.
//! - `marks` – `border`ed tables nested in course rows, titled via `matcher`.
//! - `timetable` – `table.course_tbl` courses and the credit total.
//! - `profile` – six labeled fields from the raw text.
//!
//! ## Testing notes
//! Every spec is testable offline against inline snippets or the pages in
//! `tests/fixtures/`.
pub mod attendance;
pub mod marks;
pub mod profile;
pub mod timetable;
