use std::io::Write;

use serde::Serialize;

use crate::{FrequencyMap, WordFreqError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Entries sorted by descending count, ties by ascending word.
pub fn ranked(map: &FrequencyMap) -> Vec<WordCount> {
    let mut entries: Vec<WordCount> = map
        .iter()
        .map(|(w, &c)| WordCount {
            word: w.clone(),
            count: c,
        })
        .collect();
    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries
}

/// Writes `entries` as `word,count` CSV with a header row.
pub fn write_csv<W: Write>(writer: W, entries: &[WordCount]) -> Result<(), WordFreqError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in entries {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    Ok(())
}
