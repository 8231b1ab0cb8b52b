use log::trace;

use crate::FrequencyMap;

/// Adds every count of `partial` into `acc`, consuming the partial.
pub fn merge_into(acc: &mut FrequencyMap, mut partial: FrequencyMap) {
    trace!("merging partial of {} keys into {} keys", partial.len(), acc.len());
    partial
        .drain()
        .for_each(|(w, c)| *acc.entry(w).or_default() += c);
}

/// Sums any number of partial mappings. The result does not depend on the
/// order the partials are supplied in.
pub fn merge<I>(partials: I) -> FrequencyMap
where
    I: IntoIterator<Item = FrequencyMap>,
{
    partials.into_iter().fold(FrequencyMap::default(), |mut a, b| {
        merge_into(&mut a, b);
        a
    })
}
