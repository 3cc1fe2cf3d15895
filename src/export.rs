use crate::models::CountryRecord;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File name offered for the "download filtered data" action.
pub const EXPORT_FILE_NAME: &str = "filtered_countries.csv";

/// Write records as CSV (header row of column keys) to any writer.
pub fn write_csv<W: Write>(rows: &[CountryRecord], out: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(out);
    for r in rows {
        wtr.serialize(r)?;
    }
    // An empty table still gets its header row.
    if rows.is_empty() {
        wtr.write_record(crate::models::Column::ALL.iter().map(|c| c.key()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// CSV as UTF-8 bytes, ready to hand to a download/save action.
pub fn to_csv_bytes(rows: &[CountryRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(buf)
}

pub fn to_csv_string(rows: &[CountryRecord]) -> Result<String> {
    String::from_utf8(to_csv_bytes(rows)?).context("csv output is not utf-8")
}

/// Parse CSV produced by [`write_csv`] back into records.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<CountryRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(input);
    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<CountryRecord>().enumerate() {
        out.push(rec.with_context(|| format!("parse csv row {}", i + 1))?);
    }
    Ok(out)
}

/// Save records as CSV with header.
pub fn save_csv<P: AsRef<Path>>(rows: &[CountryRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv(rows, f)
}

/// Save records as CSV under [`EXPORT_FILE_NAME`] inside `dir`; returns the written path.
pub fn save_csv_in_dir<P: AsRef<Path>>(rows: &[CountryRecord], dir: P) -> Result<PathBuf> {
    let path = dir.as_ref().join(EXPORT_FILE_NAME);
    save_csv(rows, &path)?;
    Ok(path)
}

/// Save records as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(rows: &[CountryRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
