use log::debug;

use crate::WordFreqError;

/// Stride used to split `len` tokens into at most `chunk_count` chunks,
/// i.e. `ceil(len / chunk_count)`.
pub fn chunk_size(len: usize, chunk_count: usize) -> Result<usize, WordFreqError> {
    if chunk_count == 0 {
        return Err(WordFreqError::InvalidChunkCount(chunk_count));
    }
    Ok(len.div_ceil(chunk_count))
}

/// Splits `tokens` into contiguous, non-overlapping chunks whose
/// concatenation is exactly `tokens`.
///
/// Every chunk but the last holds `chunk_size(len, chunk_count)` tokens; the
/// last holds the remainder. Strides past the end are never produced, so the
/// result can hold fewer than `chunk_count` chunks, and none when `tokens`
/// is empty.
pub fn partition(tokens: &[String], chunk_count: usize) -> Result<Vec<&[String]>, WordFreqError> {
    let size = chunk_size(tokens.len(), chunk_count)?;
    if size == 0 {
        return Ok(Vec::new());
    }
    let chunks: Vec<&[String]> = tokens.chunks(size).collect();
    debug!(
        "partitioned {} tokens into {} chunks of up to {} (requested {})",
        tokens.len(),
        chunks.len(),
        size,
        chunk_count
    );
    Ok(chunks)
}
