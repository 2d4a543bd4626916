// src/engine/types.rs
use serde::Serialize;

use crate::data::ScrapeResult;
use crate::report::Issue;
use crate::summary::Summary;

/// What one run produced: the result proper plus every non-fatal issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub result: ScrapeResult,
    pub issues: Vec<Issue>,
}

/// JSON payload. Flattens the result so the default output is exactly the
/// `ScrapeResult` object; extras appear only when asked for.
#[derive(Debug, Serialize)]
pub struct Payload<'a> {
    #[serde(flatten)]
    pub result: &'a ScrapeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<&'a [Issue]>,
}

impl<'a> Payload<'a> {
    pub fn new(result: &'a ScrapeResult) -> Self {
        Self { result, summary: None, issues: None }
    }
}
