//! CSV writer for scraped business records
//!
//! One file per run, written in a single pass at the end. The file starts
//! with a UTF-8 byte order mark so spreadsheet tools pick the right
//! encoding for the Arabic text.

use crate::output::OutputError;
use crate::scrape::BusinessRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// UTF-8 byte order mark, written before the CSV data
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Column headers, written even when there are no records
const HEADERS: [&str; 5] = ["Business Number", "URL", "Title", "Content", "Class"];

/// Writes all records to a CSV file at the given path
///
/// The first column is a 1-based sequence number assigned by position in
/// `records`; it is not a field scraped from the site.
///
/// # Arguments
///
/// * `path` - Output file path (truncated if it already exists)
/// * `records` - Records in the order they should appear
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(OutputError)` - IO or CSV serialization failure
pub fn write_records(path: &Path, records: &[BusinessRecord]) -> Result<(), OutputError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADERS)?;

    for (i, record) in records.iter().enumerate() {
        let number = (i + 1).to_string();
        writer.write_record([
            number.as_str(),
            record.url.as_str(),
            record.title.as_str(),
            record.content.as_str(),
            record.category.as_str(),
        ])?;
        tracing::info!("Business {} saved", i + 1);
    }

    writer.flush()?;
    Ok(())
}
