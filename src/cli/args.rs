use std::path::PathBuf;

use clap::Parser;

use crate::core::config::ExportOptions;

#[derive(Parser, Debug)]
#[command(name = "sheet_to_csv")]
#[command(about = "Export a Google Sheet to a local CSV file using a service account")]
#[command(version)]
pub struct Args {
    /// ID of the Google Sheet file
    #[arg(long, env = "GOOGLE_SHEET_ID", value_name = "FILE_ID")]
    pub file_id: String,

    /// Service account key file, generated from GOOGLE_* env vars when missing [default: <app dir>/tokens/credentials.json]
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Where to write the CSV [default: <app dir>/assets/output.csv]
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Print progress for each step
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> ExportOptions {
        ExportOptions {
            file_id: self.file_id,
            key_file: self.key_file,
            output_file: self.output_file,
            verbose: Some(self.verbose),
        }
    }
}
