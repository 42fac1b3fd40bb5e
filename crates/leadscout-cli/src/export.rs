//! CSV export of ranked search results.
//!
//! Column order is fixed and matches the normalized row shape: Name, Address,
//! Price Level, Has Website, Website. `Has Website` is serialized as
//! `Yes`/`No` for spreadsheet readability; every other field is written
//! verbatim from the normalized record.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use leadscout_places::NormalizedPlace;

const HEADERS: [&str; 5] = ["Name", "Address", "Price Level", "Has Website", "Website"];

/// Write the ranked rows as CSV to `path`, creating or truncating the file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a record cannot be
/// written.
pub(crate) fn write_csv_file(path: &Path, rows: &[NormalizedPlace]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    write_csv(file, rows)
}

/// Write the ranked rows as CSV to any writer. Split out from the file
/// variant so tests can capture the output in a buffer.
pub(crate) fn write_csv<W: Write>(writer: W, rows: &[NormalizedPlace]) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for row in rows {
        csv_writer.write_record([
            row.name.as_str(),
            row.address.as_str(),
            row.price_level.as_str(),
            if row.has_website { "Yes" } else { "No" },
            row.website.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
