// Command line front end for Moroccan identity card scanning

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cinscan::{
    models::{IdentityRecord, ScanResponse},
    processing::{FieldExtractor, ImageProcessor, OcrConfig, TesseractRecognizer},
    utils::ScanError,
    IdCardScanner,
};
use log::{error, info};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cinscan", version, about = "Read Moroccan national identity cards")]
struct Cli {
    /// Date used to tell birth, issue and expiry dates apart (YYYY-MM-DD).
    /// Defaults to today.
    #[arg(long, global = true, value_parser = parse_reference_date)]
    reference_date: Option<NaiveDate>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// OCR a card image and extract its fields
    Scan {
        image: PathBuf,

        /// Directory containing Tesseract traineddata files
        #[arg(long)]
        tessdata: Option<PathBuf>,

        /// Tesseract language
        #[arg(long, default_value = "fra")]
        lang: String,
    },
    /// Extract fields from already recognized text, one fragment per line ("-" for stdin)
    Extract { tokens: PathBuf },
    /// Report service status
    Health,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
}

fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn read_tokens(path: &Path) -> Result<Vec<String>, ScanError> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn scan(image: &Path, config: OcrConfig, extractor: FieldExtractor) -> Result<IdentityRecord, ScanError> {
    // Reject a bad upload before paying for OCR model start-up
    let image_bytes = ImageProcessor::read_image_file(image)?;
    let recognizer = TesseractRecognizer::new(config)?;
    info!("Scanning {}", image.display());
    IdCardScanner::new(recognizer, extractor).scan_bytes(&image_bytes)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> bool {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(err) => {
            error!("Failed to serialize output: {}", err);
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let extractor = match cli.reference_date {
        Some(date) => FieldExtractor::with_reference_date(date),
        None => FieldExtractor::new(),
    };

    let outcome = match cli.command {
        Command::Scan {
            image,
            tessdata,
            lang,
        } => {
            let config = OcrConfig {
                tessdata_dir: tessdata,
                language: lang,
            };
            scan(&image, config, extractor)
        }
        Command::Extract { tokens } => read_tokens(&tokens).map(|tokens| extractor.extract(&tokens)),
        Command::Health => {
            let status = HealthStatus {
                status: "healthy",
                service: "Moroccan ID OCR Scanner",
            };
            return if print_json(&status, cli.pretty) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    let (response, code) = match outcome {
        Ok(record) => (ScanResponse::ok(record), ExitCode::SUCCESS),
        Err(err) => {
            error!("Scan failed: {}", err);
            (ScanResponse::failed(err.to_string()), ExitCode::FAILURE)
        }
    };

    if print_json(&response, cli.pretty) {
        code
    } else {
        ExitCode::FAILURE
    }
}
