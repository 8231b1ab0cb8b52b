use crate::FrequencyMap;

/// Counts every token in a single pass.
///
/// This is the baseline the parallel path is checked against, and also the
/// routine each parallel unit runs over its own chunk.
pub fn count_sequential(tokens: &[String]) -> FrequencyMap {
    tokens.iter().fold(FrequencyMap::default(), |mut map, w| {
        *map.entry(w.clone()).or_default() += 1u64;
        map
    })
}
