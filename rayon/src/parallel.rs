use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::mpsc,
};

use log::{debug, info};
use crate::{count_sequential, merge_into, partition, FrequencyMap, WordFreqError};

/// Counts `tokens` split into at most `chunk_count` chunks, one counting
/// unit per chunk, and merges the partial counts.
///
/// The result equals [`count_sequential`] over the same tokens.
pub fn count_parallel(tokens: &[String], chunk_count: usize) -> Result<FrequencyMap, WordFreqError> {
    count_with(tokens, chunk_count, count_sequential)
}

/// Same as [`count_parallel`] with a caller supplied per-chunk routine.
///
/// Every unit is a separate task on the global rayon pool, so the number
/// of chunks never decides how many threads exist. All units are spawned before any result is collected and the
/// call returns only once all of them have finished. Partials travel by
/// value over a channel and are merged on the calling thread in arrival
/// order. If any unit panics the whole pass fails and no mapping is
/// returned.
pub fn count_with<F>(tokens: &[String], chunk_count: usize, unit: F) -> Result<FrequencyMap, WordFreqError>
where
    F: Fn(&[String]) -> FrequencyMap + Sync,
{
    let chunks = partition(tokens, chunk_count)?;
    if chunks.is_empty() {
        return Ok(FrequencyMap::default());
    }

    let (tx, rx) = mpsc::channel();
    let unit = &unit;
    rayon::scope(|s| {
        for (index, &chunk) in chunks.iter().enumerate() {
            let tx = tx.clone();
            s.spawn(move |_| {
                let partial = panic::catch_unwind(AssertUnwindSafe(|| unit(chunk)));
                if let Ok(map) = &partial {
                    debug!("unit {index}: {} tokens, {} distinct", chunk.len(), map.len());
                }
                let _ = tx.send((index, partial));
            });
        }
    });
    // Join barrier passed: every unit has sent exactly once.
    drop(tx);

    let mut merged = FrequencyMap::default();
    let mut received = 0;
    for (index, partial) in rx {
        let partial = partial.map_err(|payload| WordFreqError::WorkerPanicked {
            chunk: index,
            message: panic_message(payload.as_ref()),
        })?;
        merge_into(&mut merged, partial);
        received += 1;
    }
    debug_assert_eq!(received, chunks.len());

    info!(
        "counted {} tokens in {} chunks: {} distinct",
        tokens.len(),
        chunks.len(),
        merged.len()
    );
    Ok(merged)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &str) -> Vec<String> {
        words.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn matches_sequential() {
        let t = tokens("the cat sat the cat sat on the mat");
        let expected = count_sequential(&t);
        for k in 1..=12 {
            assert_eq!(count_parallel(&t, k).unwrap(), expected, "k = {k}");
        }
    }

    #[test]
    fn rejects_zero_chunks() {
        let t = tokens("a b c");
        assert!(matches!(
            count_parallel(&t, 0),
            Err(WordFreqError::InvalidChunkCount(0))
        ));
    }

    #[test]
    fn one_unit_per_chunk() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let t = tokens("a b c d e f g");
        let calls = AtomicUsize::new(0);
        let map = count_with(&t, 3, |chunk| {
            calls.fetch_add(1, Ordering::SeqCst);
            count_sequential(chunk)
        })
        .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(map.values().sum::<u64>(), 7);
    }

    #[test]
    fn panicking_unit_fails_the_pass() {
        let t = tokens("a b c d e f");
        let result = count_with(&t, 3, |chunk| {
            if chunk.iter().any(|w| w == "c") {
                panic!("boom");
            }
            count_sequential(chunk)
        });
        match result {
            Err(WordFreqError::WorkerPanicked { chunk, message }) => {
                assert_eq!(chunk, 1);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn chunk_count_far_above_core_count() {
        let t: Vec<String> = (0..10_000).map(|i| format!("w{}", i % 97)).collect();
        let expected = count_sequential(&t);
        assert_eq!(count_parallel(&t, 10_000).unwrap(), expected);
        assert_eq!(count_parallel(&t, 50_000).unwrap(), expected);
    }

    #[test]
    fn panic_message_of_unknown_payload() {
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
