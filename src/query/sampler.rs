use rand::Rng;

/// Reduce `candidates` to at most `limit` words.
///
/// When nothing has to be dropped the candidates come back untouched and in
/// order. Otherwise exactly `limit` distinct entries are drawn uniformly.
pub fn sample<R: Rng + ?Sized>(candidates: Vec<String>, limit: usize, rng: &mut R) -> Vec<String> {
    if candidates.len() <= limit {
        return candidates;
    }

    let mut slots: Vec<Option<String>> = candidates.into_iter().map(Some).collect();
    rand::seq::index::sample(rng, slots.len(), limit)
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect()
}
