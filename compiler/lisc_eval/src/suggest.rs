//! "Did you mean?" suggestions for undefined variables.
//!
//! Uses Levenshtein edit distance over the names visible at the failing
//! reference. The threshold grows with the length of the unknown name so
//! that short names are not matched against unrelated ones.

/// Levenshtein edit distance between two identifiers.
///
/// Identifiers are ASCII, so the distance is computed over bytes.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "row indices and distances are bounded by the identifier lengths"
)]
pub(crate) fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row optimization instead of the full matrix
    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, &a_byte) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &b_byte) in b.iter().enumerate() {
            let cost = usize::from(a_byte != b_byte);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Maximum edit distance accepted for a name of `name_len` bytes.
///
/// - 1-2 chars: 1 edit
/// - 3-5 chars: 2 edits
/// - 6-10 chars: 3 edits
/// - longer: 5 edits
fn default_threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        _ => 5,
    }
}

/// Find the candidate closest to `name`, if one is within the threshold.
///
/// Ties go to the earliest candidate, so callers list the preferred names
/// first.
pub(crate) fn suggest_similar<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let threshold = default_threshold(name.len());
    if threshold == 0 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        // Skip if too different in length
        if name.len().abs_diff(candidate.len()) > threshold {
            continue;
        }

        let distance = edit_distance(name, candidate);
        if distance > threshold {
            continue;
        }
        match best {
            Some((_, best_dist)) if distance >= best_dist => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(candidate, _)| candidate)
}
