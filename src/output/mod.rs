//! Output module for writing scrape results
//!
//! This module handles serializing the collected business records into the
//! final CSV file.

mod csv_output;

pub use csv_output::write_records;

use thiserror::Error;

/// Errors from writing the output file
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
