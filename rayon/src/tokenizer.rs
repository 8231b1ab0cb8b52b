use regex::Regex;

/// Maximal runs of unicode letters and digits.
const WORD_PATTERN: &str = r"[\p{L}\p{N}]+";

/// Splits text on anything that is neither a letter nor a digit and
/// lower-cases every run.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    re: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            re: Regex::new(WORD_PATTERN).expect("word pattern compiles"),
        }
    }

    /// Tokens in input order. Empty or separator-only input yields no tokens.
    pub fn tokenize(&self, value: &str) -> Vec<String> {
        self.re
            .find_iter(value)
            .map(|t| lowercase_word(t.as_str()))
            .collect()
    }
}

/// Lower-cases per character and drops anything the mapping adds that is
/// not a letter or digit (`İ` lower-cases to `i` plus U+0307).
fn lowercase_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
