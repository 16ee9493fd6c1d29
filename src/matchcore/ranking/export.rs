use std::io;
use std::path::Path;
use serde::Serialize;
use crate::matchcore::error::Result;
use super::{RankedEntry, RankedList};

/// One line of the CSV summary. Columns a failed resume has no value for stay empty.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    resume_id: &'a str,
    combined: Option<f64>,
    cosine: Option<f64>,
    jaccard: Option<f64>,
    keyword: Option<f64>,
    label: Option<&'a str>,
    confidence: Option<f64>,
    error: Option<&'a str>,
}

impl<'a> CsvRow<'a> {
    fn new(rank: usize, entry: &'a RankedEntry) -> Self {
        let result = entry.result();
        CsvRow{
            rank,
            resume_id: entry.resume_id(),
            combined: result.map(|r| r.combined),
            cosine: result.map(|r| r.cosine),
            jaccard: result.map(|r| r.jaccard),
            keyword: result.and_then(|r| r.keyword),
            label: result.and_then(|r| r.label()),
            confidence: result.and_then(|r| r.confidence()),
            error: entry.error(),
        }
    }
}

/// Writes one row per entry, in ranked order, with a header line.
pub fn write_csv<W: io::Write>(list: &RankedList, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, entry) in list.entries().iter().enumerate() {
        wtr.serialize(CsvRow::new(i + 1, entry))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_csv(list: &RankedList, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(list, io::BufWriter::new(file))
}
