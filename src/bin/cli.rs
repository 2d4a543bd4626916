// src/bin/cli.rs
use academia_scrape::cli::{self, Command};
use academia_scrape::loge;
use color_eyre::eyre::{Result, WrapErr};

fn main() {
    // Only fails if a hook is already installed; the report still formats.
    let _ = color_eyre::install();

    if let Err(report) = try_main() {
        let message = report
            .chain()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(": ");
        loge!("{message}");
        println!("{}", cli::error_json(&message));
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let opts = match cli::parse_args(std::env::args().skip(1)).wrap_err("invalid arguments")? {
        Command::Help => {
            eprintln!("{}", cli::HELP);
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    cli::run(&opts).wrap_err("extraction failed")?;
    Ok(())
}
