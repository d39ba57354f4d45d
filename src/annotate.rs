//! Offset annotation of raw analyzer output.

use crate::category::Category;
use crate::error::{Error, Result};
use crate::model::{Morpheme, RawMorpheme};

/// Attaches character offsets and the word-like flag to analyzer output.
///
/// Offsets come from a running cursor over surface lengths. The surfaces are
/// assumed to concatenate to the analyzed text; nothing here checks it, so
/// analyzer output with gaps or overlaps yields shifted offsets. Use
/// [`annotate_checked`] to reject such output instead.
pub fn annotate<I>(raw: I) -> Vec<Morpheme>
where
    I: IntoIterator<Item = RawMorpheme>,
{
    let mut cursor = 0;
    raw.into_iter()
        .map(|morpheme| {
            let start = cursor;
            let end = start + morpheme.surface.chars().count();
            cursor = end;
            let category = Category::from_label(&morpheme.category);
            Morpheme {
                is_word_like: category.is_word_like(),
                category,
                surface: morpheme.surface,
                detail: morpheme.detail,
                reading: morpheme.reading.unwrap_or_default(),
                start,
                end,
            }
        })
        .collect()
}

/// Like [`annotate`], but fails when the surfaces do not rebuild `text`.
pub fn annotate_checked<I>(text: &str, raw: I) -> Result<Vec<Morpheme>>
where
    I: IntoIterator<Item = RawMorpheme>,
{
    let morphemes = annotate(raw);
    verify_surfaces(text, &morphemes)?;
    Ok(morphemes)
}

/// Checks that `morphemes` cover `text` exactly, in order.
pub fn verify_surfaces(text: &str, morphemes: &[Morpheme]) -> Result<()> {
    let mut rest = text;
    let mut offset = 0;

    for morpheme in morphemes {
        match rest.strip_prefix(morpheme.surface.as_str()) {
            Some(tail) => {
                rest = tail;
                offset += morpheme.char_len();
            }
            None => {
                return Err(Error::SurfaceMismatch {
                    offset,
                    expected: rest.chars().take(morpheme.char_len()).collect(),
                    found: morpheme.surface.clone(),
                });
            }
        }
    }

    if !rest.is_empty() {
        return Err(Error::SurfaceMismatch {
            offset,
            expected: rest.to_string(),
            found: String::new(),
        });
    }
    Ok(())
}
