//! Levenshtein edit distance over token sequences

/// Minimum number of single-token insertions, deletions and substitutions
/// turning `a` into `b`.
///
/// Runs the usual `(m+1)×(n+1)` dynamic program keeping only two rows.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, token_a) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, token_b) in b.iter().enumerate() {
            curr[j + 1] = if token_a == token_b {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit distance between two strings, counted in Unicode scalar values
pub fn char_edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

/// Edit distance between whitespace-separated token sequences
pub fn token_edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<&str> = a.split_whitespace().collect();
    let b: Vec<&str> = b.split_whitespace().collect();
    edit_distance(&a, &b)
}
