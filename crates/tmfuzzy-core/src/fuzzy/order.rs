//! Word-order inversions between matched sequences

/// Indices `i` in `shorter` where the pair `(i - 1, i)` appears in reverse
/// order in `longer`.
///
/// Positions are first occurrences. Tokens missing from `longer` never count
/// as inverted.
pub fn inverted_pairs(shorter: &[String], longer: &[String]) -> Vec<usize> {
    let position = |token: &String| longer.iter().position(|t| t == token);

    shorter
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| match (position(&pair[0]), position(&pair[1])) {
            (Some(previous), Some(current)) if previous > current => Some(i + 1),
            _ => None,
        })
        .collect()
}
