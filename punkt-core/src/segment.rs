//! Sentence spans from break decisions

use crate::language::LanguageVars;

/// Span of the text without leading and trailing whitespace
pub(crate) fn trimmed_bounds(text: &str) -> (usize, usize) {
    let start = text.len() - text.trim_start().len();
    let end = text.trim_end().len();
    (start, end.max(start))
}

/// Reattach closing quotes and brackets at the start of a sentence to the
/// sentence before it
///
/// Spans must be sorted and non-overlapping. Spans left empty by the move
/// are dropped.
pub(crate) fn realign_boundaries(
    lang: &dyn LanguageVars,
    text: &str,
    spans: &[(usize, usize)],
) -> Vec<(usize, usize)> {
    let mut realigned = Vec::with_capacity(spans.len());
    let mut shift = 0;

    for (i, &(start, end)) in spans.iter().enumerate() {
        let start = (start + shift).min(end);
        shift = 0;

        let Some(&(next_start, next_end)) = spans.get(i + 1) else {
            if start < end {
                realigned.push((start, end));
            }
            continue;
        };

        match lang.boundary_realignment(&text[next_start..next_end]) {
            Some((closers, consumed)) => {
                realigned.push((start, next_start + closers));
                shift = consumed;
            }
            None if start < end => realigned.push((start, end)),
            None => {}
        }
    }

    realigned
}
