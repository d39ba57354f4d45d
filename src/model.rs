use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Morpheme as handed over by the external analyzer.
///
/// Surfaces of consecutive entries are expected to concatenate back to the
/// analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMorpheme {
    /// Literal substring of the input.
    pub surface: String,
    /// Coarse part-of-speech label (`名詞`, `動詞`, ...).
    pub category: String,
    /// Fine-grained sub-category label (`自立`, `接尾`, ...).
    pub detail: String,
    /// Phonetic reading, if the analyzer knows one.
    pub reading: Option<String>,
}

impl RawMorpheme {
    /// Creates a morpheme without a reading.
    pub fn new(
        surface: impl Into<String>,
        category: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            category: category.into(),
            detail: detail.into(),
            reading: None,
        }
    }

    /// Sets the phonetic reading.
    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = Some(reading.into());
        self
    }
}

/// Morpheme with absolute offsets into the analyzed text.
///
/// `start`/`end` are character offsets (`str.chars()` index space), `end`
/// exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    /// Literal substring of the input.
    pub surface: String,
    /// Coarse part-of-speech.
    pub category: Category,
    /// Fine-grained sub-category label.
    pub detail: String,
    /// Phonetic reading, empty when unknown.
    pub reading: String,
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
    /// False for punctuation and symbols.
    pub is_word_like: bool,
}

impl Morpheme {
    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Run of consecutive morphemes treated as one learner-sized chunk.
///
/// `category`, `detail` and `is_word_like` always describe the first absorbed
/// morpheme; only `surface`, `reading` and `end` grow as morphemes are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Concatenated surfaces of the absorbed morphemes.
    pub surface: String,
    /// Concatenated readings of the absorbed morphemes.
    pub reading: String,
    /// Category of the head morpheme.
    pub category: Category,
    /// Sub-category of the head morpheme.
    pub detail: String,
    /// Word-likeness of the head morpheme.
    pub is_word_like: bool,
    /// Start offset of the head morpheme.
    pub start: usize,
    /// End offset of the last absorbed morpheme.
    pub end: usize,
    /// Original morphemes, in order.
    pub absorbed: Vec<Morpheme>,
}

impl Segment {
    /// Opens a segment headed by `morpheme`.
    pub fn open(morpheme: Morpheme) -> Self {
        Self {
            surface: morpheme.surface.clone(),
            reading: morpheme.reading.clone(),
            category: morpheme.category.clone(),
            detail: morpheme.detail.clone(),
            is_word_like: morpheme.is_word_like,
            start: morpheme.start,
            end: morpheme.end,
            absorbed: vec![morpheme],
        }
    }

    pub(crate) fn absorb(&mut self, morpheme: Morpheme) {
        self.surface.push_str(&morpheme.surface);
        self.reading.push_str(&morpheme.reading);
        self.end = morpheme.end;
        self.absorbed.push(morpheme);
    }

    /// Most recently absorbed morpheme.
    pub fn last_morpheme(&self) -> Option<&Morpheme> {
        self.absorbed.last()
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

impl From<Morpheme> for Segment {
    fn from(value: Morpheme) -> Self {
        Segment::open(value)
    }
}

/// Result unit returned by [`crate::Segmenter::segment`].
///
/// In merged mode a token mirrors one [`Segment`]; in full-breakdown mode it
/// wraps exactly one [`Morpheme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text.
    pub surface: String,
    /// Phonetic reading, empty when unknown.
    pub reading: String,
    /// Category of the head morpheme.
    pub category: Category,
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
    /// False for punctuation and symbols.
    pub is_word_like: bool,
    /// Morphemes making up this token.
    pub morphemes: Vec<Morpheme>,
}

impl From<Segment> for Token {
    fn from(value: Segment) -> Self {
        Self {
            surface: value.surface,
            reading: value.reading,
            category: value.category,
            start: value.start,
            end: value.end,
            is_word_like: value.is_word_like,
            morphemes: value.absorbed,
        }
    }
}

impl From<Morpheme> for Token {
    fn from(value: Morpheme) -> Self {
        Segment::open(value).into()
    }
}
