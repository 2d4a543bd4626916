// src/cli.rs
use std::path::PathBuf;

use crate::config::Options;
use crate::config::consts::DEFAULT_LOG_FILE;
use crate::config::options::OutputOptions;
use crate::engine::{self, Extraction, Payload};
use crate::error::{Error, Result};
use crate::file::{read_page, write_output};
use crate::log::{self, Level, Target};
use crate::summary::summarize;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(Options),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut output = OutputOptions::default();
    let mut log_target = Target::Stderr;
    let mut level = Level::Info;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| usage("Missing output path"))?;
                output.path = Some(PathBuf::from(v)); }
            "--pretty" => output.pretty = true,
            "--summary" => output.summary = true,
            "--issues" => output.issues = true,
            "--log" => {
                let v = args.next().ok_or_else(|| usage("Missing log file path"))?;
                log_target = Target::File(PathBuf::from(v)); }
            "--log-default" => log_target = Target::File(PathBuf::from(DEFAULT_LOG_FILE)),
            "-q" | "--quiet" => log_target = Target::Off,
            "-v" | "--verbose" => level = Level::Debug,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(usage(&format!("Unknown arg: {}", flag)));
            }
            other => positional.push(PathBuf::from(other)),
        }
    }

    let [attendance, timetable]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|got: Vec<PathBuf>| {
            usage(&format!("Expected 2 page files (attendance, timetable), got {}", got.len()))
        })?;

    let mut opts = Options::new(attendance, timetable);
    opts.output = output;
    opts.log.target = log_target;
    opts.log.level = level;
    Ok(Command::Run(opts))
}

fn usage(msg: &str) -> Error {
    Error::Usage(s!(msg))
}

/// Read both pages, extract, write the payload. Returns the extraction so
/// callers (and tests) can inspect it.
pub fn run(opts: &Options) -> Result<Extraction> {
    log::init(opts.log.target.clone(), opts.log.level);

    let attendance_html = read_page("attendance", &opts.input.attendance)?;
    let timetable_html = read_page("timetable", &opts.input.timetable)?;
    logd!(
        "read {} bytes attendance, {} bytes timetable",
        attendance_html.len(),
        timetable_html.len()
    );

    let extraction = engine::extract(&attendance_html, &timetable_html)?;
    let body = render(&extraction, &opts.output)?;

    if let Some(path) = write_output(opts.output.path.as_deref(), &body)? {
        logf!("wrote {}", path.display());
    }
    Ok(extraction)
}

/// JSON text for one extraction, shaped by the output options.
pub fn render(extraction: &Extraction, output: &OutputOptions) -> Result<String> {
    let mut payload = Payload::new(&extraction.result);
    if output.summary {
        payload.summary = Some(summarize(&extraction.result));
    }
    if output.issues {
        payload.issues = Some(&extraction.issues);
    }

    let text = if output.pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    Ok(text)
}

/// The object emitted instead of a result when the run fails.
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
