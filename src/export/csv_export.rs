use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ExportError;
use crate::generator::GeneratedItem;

/// Filename used when the caller does not pick one
pub const DEFAULT_CSV_FILENAME: &str = "Posts.csv";

const HEADER: &str = "Posts";

/// Write a `Posts` header and one row per item
pub fn write_csv<W: Write>(writer: W, items: &[GeneratedItem]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([HEADER])?;
    for item in items {
        csv.write_record([item.text.as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the CSV export to a file, creating or truncating it
pub fn export_csv(path: impl AsRef<Path>, items: &[GeneratedItem]) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    write_csv(file, items)
}
