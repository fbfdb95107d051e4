//! Ingredient highlighting.
//!
//! Every case-insensitive occurrence of every term is marked. Marks are
//! additive: a byte covered by "peanut" and "nut" has depth 2.

/// A run of ingredient text with a uniform mark depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Number of highlight terms covering this run; 0 means unmarked.
    pub depth: u16,
}

impl Segment<'_> {
    pub fn is_marked(&self) -> bool {
        self.depth > 0
    }
}

/// Split `text` into runs by highlight depth.
///
/// Matching is ASCII case-insensitive so byte offsets in the lowercased copy
/// line up with `text`.
pub fn highlight<'a, S: AsRef<str>>(text: &'a str, terms: &[S]) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    let haystack = text.to_ascii_lowercase();
    let mut depth = vec![0u16; text.len()];
    for term in terms {
        let needle = term.as_ref().to_ascii_lowercase();
        if needle.is_empty() {
            continue;
        }
        for (start, _) in haystack.match_indices(needle.as_str()) {
            for d in &mut depth[start..start + needle.len()] {
                *d = d.saturating_add(1);
            }
        }
    }

    let mut segments = Vec::new();
    let mut start = 0;
    for i in 1..=text.len() {
        let boundary = i == text.len() || (depth[i] != depth[start] && text.is_char_boundary(i));
        if boundary {
            segments.push(Segment {
                text: &text[start..i],
                depth: depth[start],
            });
            start = i;
        }
    }
    segments
}
