//! Single-edit adjacency between words
//!
//! Words are compared as sequences of Unicode scalar values, so "café" and
//! "cafe" differ in one position rather than in two bytes.

/// True when `a` becomes `b` through exactly one substitution, insertion or
/// deletion of a single character. Identical words are not adjacent.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    match a.len().abs_diff(b.len()) {
        0 => a.iter().zip(&b).filter(|(x, y)| x != y).take(2).count() == 1,
        1 if a.len() < b.len() => is_single_insertion(&a, &b),
        1 => is_single_insertion(&b, &a),
        _ => false,
    }
}

/// `longer` is exactly one character longer than `shorter`. Scan both left
/// to right, allowing the longer word to skip one mismatching character.
///
/// Greedy skipping is safe with repeated letters: skipping any one copy of
/// a run leaves the same remainder.
fn is_single_insertion(shorter: &[char], longer: &[char]) -> bool {
    let (mut i, mut j) = (0, 0);
    let mut skipped = false;

    while i < shorter.len() && j < longer.len() {
        if shorter[i] == longer[j] {
            i += 1;
            j += 1;
        } else if skipped {
            return false;
        } else {
            skipped = true;
            j += 1;
        }
    }

    true
}

/// True when the Levenshtein distance between `a` and `b` is at most `d`.
///
/// Rows of the edit-distance table are abandoned as soon as every cell
/// exceeds `d`.
pub fn edit_distance_within(a: &str, b: &str, d: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > d {
        return false;
    }
    if a == b {
        return true;
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        if current.iter().all(|&cell| cell > d) {
            return false;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()] <= d
}
