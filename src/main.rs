// src/main.rs
use authdoc_scan::cli::Cli;
use authdoc_scan::{HttpDocumentSource, ScanError, Scanner, Settings};
use env_logger::Env;
use log::info;
use std::io;
use structopt::StructOpt;

fn main() -> Result<(), ScanError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::from_args();

    let mut settings = match cli.config {
        Some(ref path) => match Settings::load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load configuration: {:?}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    if let Some(url) = cli.url {
        settings.url = url;
    }
    if let Some(filter) = cli.filter {
        settings.filter = filter;
    }

    info!("scanning {} with {:?} filter", settings.url, settings.filter);

    let scanner = Scanner::new(HttpDocumentSource::new());
    let stdout = io::stdout();
    let printed = scanner.run(&settings, &mut stdout.lock())?;

    info!("{} matching lines", printed);
    Ok(())
}
