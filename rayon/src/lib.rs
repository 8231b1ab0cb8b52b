//! Word frequency counting over a tokenized document, sequentially or over
//! contiguous chunks counted in parallel and merged.

use std::{collections::HashMap, hash::BuildHasherDefault};

use wyhash::WyHash;

mod counter;
mod error;
mod merge;
mod parallel;
mod partition;
mod report;
mod tokenizer;

pub use counter::count_sequential;
pub use error::WordFreqError;
pub use merge::{merge, merge_into};
pub use parallel::{count_parallel, count_with};
pub use partition::{chunk_size, partition};
pub use report::{ranked, write_csv, WordCount};
pub use tokenizer::Tokenizer;

/// Token to occurrence count. Every present key has a count of at least 1.
pub type FrequencyMap = HashMap<String, u64, BuildHasherDefault<WyHash>>;

/// A document tokenized once and counted any number of times.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tokens: Vec<String>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        Self::with_tokenizer(&Tokenizer::new(), text)
    }

    pub fn with_tokenizer(tokenizer: &Tokenizer, text: &str) -> Self {
        Self {
            tokens: tokenizer.tokenize(text),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn count_sequential(&self) -> FrequencyMap {
        count_sequential(&self.tokens)
    }

    pub fn count_parallel(&self, chunk_count: usize) -> Result<FrequencyMap, WordFreqError> {
        count_parallel(&self.tokens, chunk_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_counts_agree() {
        let doc = Document::new("The cat sat. The CAT sat!");
        assert_eq!(doc.len(), 6);
        let seq = doc.count_sequential();
        for k in [1, 2, 3, 6] {
            assert_eq!(doc.count_parallel(k).unwrap(), seq);
        }
    }

    #[test]
    fn empty_document() {
        let doc = Document::new("");
        assert!(doc.is_empty());
        assert!(doc.count_sequential().is_empty());
        assert!(doc.count_parallel(4).unwrap().is_empty());
    }
}
