use tracing::{debug_span, trace};

use crate::model::{Morpheme, Segment};
use crate::rules::{first_match, MERGE_RULES};

/// Folds annotated morphemes into segments in one left-to-right pass.
///
/// Each morpheme is offered to the most recent segment only; a segment that
/// refuses a morpheme is closed and never reopened. Offsets are preserved, so
/// the output covers exactly the same text as the input.
pub fn merge_tokens<I>(morphemes: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Morpheme>,
{
    let morphemes = morphemes.into_iter();
    let _span = debug_span!("merge_tokens", morphemes = morphemes.size_hint().0).entered();
    let mut segments: Vec<Segment> = Vec::new();

    for morpheme in morphemes {
        if let Some(open) = segments.last_mut() {
            if let Some(rule) = first_match(MERGE_RULES, open, &morpheme) {
                trace!(
                    prev = %open.surface,
                    curr = %morpheme.surface,
                    rule = rule.name,
                    merge = rule.verdict.merges(),
                    "merge decision"
                );
                if rule.verdict.merges() {
                    open.absorb(morpheme);
                    continue;
                }
            }
        }
        segments.push(Segment::open(morpheme));
    }

    segments
}
