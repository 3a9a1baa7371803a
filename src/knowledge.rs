//! Knowledge table: win percentages learned from simulated deals.
//!
//! Text format, one entry per line: `hole,flop,turn,river,board|percent`,
//! for example `1,1,2,2,0|61.25`.

use crate::history::HistoryRecord;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum KnowledgeError {
    #[error("knowledge i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("knowledge csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected 'key|percent'")]
    Malformed { line: u64 },
    #[error("line {line}: invalid key '{key}'")]
    Key { line: u64, key: String },
    #[error("line {line}: invalid percentage '{value}'")]
    Percent { line: u64, value: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Knowledge {
    entries: BTreeMap<Vec<u8>, f64>,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, key: Vec<u8>, percent: f64) {
        self.entries.insert(key, percent);
    }

    pub fn get(&self, key: &[u8]) -> Option<f64> {
        self.entries.get(key).copied()
    }

    pub fn parse<R: Read>(input: R) -> Result<Self, KnowledgeError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b'|')
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input);

        let mut knowledge = Self::new();
        for (i, row) in reader.records().enumerate() {
            let row = row?;
            let line = row.position().map_or(i as u64 + 1, |p| p.line());
            let (Some(key), Some(value), None) = (row.get(0), row.get(1), row.get(2)) else {
                return Err(KnowledgeError::Malformed { line });
            };
            let parsed: Result<Vec<u8>, _> =
                key.split(',').map(|s| s.trim().parse::<u8>()).collect();
            let key_values = match parsed {
                Ok(v) if !v.is_empty() => v,
                _ => return Err(KnowledgeError::Key { line, key: key.to_string() }),
            };
            let percent: f64 = value
                .parse()
                .map_err(|_| KnowledgeError::Percent { line, value: value.to_string() })?;
            knowledge.insert(key_values, percent);
        }
        Ok(knowledge)
    }

    pub fn write<W: Write>(&self, out: W) -> Result<(), KnowledgeError> {
        let mut writer =
            csv::WriterBuilder::new().has_headers(false).delimiter(b'|').from_writer(out);
        for (key, percent) in &self.entries {
            let key: Vec<String> = key.iter().map(u8::to_string).collect();
            writer.write_record([key.join(","), percent.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let file = std::fs::File::open(path.as_ref())?;
        let knowledge = Self::parse(std::io::BufReader::new(file))?;
        log::info!("loaded {} knowledge entries from {}", knowledge.len(), path.as_ref().display());
        Ok(knowledge)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), KnowledgeError> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write(std::io::BufWriter::new(file))
    }

    /// Aggregate history records by their full phase-score key into win
    /// percentages.
    pub fn from_records(records: &[HistoryRecord]) -> Self {
        let mut tally: BTreeMap<Vec<u8>, (u64, u64)> = BTreeMap::new();
        for record in records {
            let entry = tally.entry(record.scores.ordinals().to_vec()).or_default();
            entry.0 += u64::from(record.won);
            entry.1 += 1;
        }
        let entries = tally
            .into_iter()
            .map(|(key, (wins, total))| (key, wins as f64 * 100.0 / total as f64))
            .collect();
        Self { entries }
    }

    /// Average win percentage over every entry whose leading scores equal
    /// `scores`. `None` when no entry matches.
    ///
    /// ```
    /// use holdem_sim::knowledge::Knowledge;
    ///
    /// let k = Knowledge::parse("1,1,2,2,0|60\n1,2,2,2,0|80\n0,0,0,0,0|10\n".as_bytes()).unwrap();
    /// assert_eq!(k.winning_odds(&[1]), Some(70.0));
    /// assert_eq!(k.winning_odds(&[1, 2]), Some(80.0));
    /// assert_eq!(k.winning_odds(&[9]), None);
    /// ```
    pub fn winning_odds(&self, scores: &[u8]) -> Option<f64> {
        let (sum, count) = self
            .entries
            .iter()
            .filter(|(key, _)| key.starts_with(scores))
            .fold((0.0, 0u32), |(sum, n), (_, pct)| (sum + pct, n + 1));
        (count > 0).then(|| sum / f64::from(count))
    }
}
