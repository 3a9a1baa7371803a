//! Per-deal history: each seat's category after every dealing phase plus the
//! showdown outcome, stored as plain comma-delimited text.
//!
//! One line per seat per deal: `hole, flop, turn, river, board, won`, where the
//! first five fields are category ordinals and `won` is `1` or `0`.

use crate::evaluator::Category;
use std::io::{Read, Write};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum HistoryError {
    #[error("history i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("history csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected 6 fields, got {got}")]
    FieldCount { line: u64, got: usize },
    #[error("line {line}: invalid field '{field}'")]
    Field { line: u64, field: String },
}

/// Category reached at each checkpoint of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseScores(pub [Category; 5]);

impl PhaseScores {
    pub const HOLE: usize = 0;
    pub const FLOP: usize = 1;
    pub const TURN: usize = 2;
    pub const RIVER: usize = 3;
    pub const BOARD: usize = 4;

    pub fn ordinals(&self) -> [u8; 5] {
        self.0.map(Category::ordinal)
    }

    /// The comma-joined key used by the knowledge table, e.g. `0,1,1,2,0`.
    pub fn key(&self) -> String {
        let parts: Vec<String> = self.ordinals().iter().map(u8::to_string).collect();
        parts.join(",")
    }

    pub fn river(&self) -> Category {
        self.0[Self::RIVER]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryRecord {
    pub scores: PhaseScores,
    /// Ties count as a win for every tied seat.
    pub won: bool,
}

impl HistoryRecord {
    pub fn new(scores: PhaseScores, won: bool) -> Self {
        Self { scores, won }
    }

    fn to_fields(self) -> [String; 6] {
        let o = self.scores.ordinals();
        [
            o[0].to_string(),
            o[1].to_string(),
            o[2].to_string(),
            o[3].to_string(),
            o[4].to_string(),
            u8::from(self.won).to_string(),
        ]
    }
}

pub fn write_records<W: Write>(out: W, records: &[HistoryRecord]) -> Result<(), HistoryError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    for record in records {
        writer.write_record(record.to_fields())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_records<R: Read>(input: R) -> Result<Vec<HistoryRecord>, HistoryError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let line = row.position().map_or(i as u64 + 1, |p| p.line());
        if row.len() != 6 {
            return Err(HistoryError::FieldCount { line, got: row.len() });
        }
        let bad = |field: &str| HistoryError::Field { line, field: field.to_string() };

        let mut scores = [Category::HighCard; 5];
        for (slot, field) in scores.iter_mut().zip(row.iter()) {
            *slot = field
                .parse::<u8>()
                .ok()
                .and_then(Category::from_ordinal)
                .ok_or_else(|| bad(field))?;
        }
        let won = match &row[5] {
            "1" => true,
            "0" => false,
            other => return Err(bad(other)),
        };
        records.push(HistoryRecord::new(PhaseScores(scores), won));
    }
    Ok(records)
}

pub fn save(path: impl AsRef<Path>, records: &[HistoryRecord]) -> Result<(), HistoryError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_records(std::io::BufWriter::new(file), records)?;
    log::info!("saved {} history records to {}", records.len(), path.as_ref().display());
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<HistoryRecord>, HistoryError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_records(std::io::BufReader::new(file))
}
