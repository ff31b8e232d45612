//! Stable flattening of nested sequences.

/// Concatenate nested sequences into one, outer order first.
///
/// Inner order is preserved within each group, so
/// `[[1, 2], [3, 4, 5], [6]]` becomes `[1, 2, 3, 4, 5, 6]`. Generic over
/// the element type; nothing here assumes movie-shaped records.
pub fn flatten<T>(groups: Vec<Vec<T>>) -> Vec<T> {
    let total = groups.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(total);
    for group in groups {
        result.extend(group);
    }
    result
}
