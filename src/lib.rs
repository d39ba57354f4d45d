#![deny(missing_docs)]

//! Learner-sized segmentation of Japanese morphological analysis.
//!
//! Morphological analyzers split text into very small units: `食べられちゃった`
//! comes back as `食べ` / `られ` / `ちゃっ` / `た`. This crate folds such
//! morphemes back into chunks that are useful for dictionary lookup and
//! reading aids, while keeping every original morpheme and its offsets.
//!
//! ## Quick Start
//! ```
//! use std::convert::Infallible;
//! use std::sync::Arc;
//!
//! use wakachi_rs::{Analyzer, RawMorpheme, SegmentOptions, Segmenter};
//!
//! struct Fixed;
//!
//! impl Analyzer for Fixed {
//!     type Error = Infallible;
//!
//!     fn analyze(&self, _text: &str) -> Result<Vec<RawMorpheme>, Infallible> {
//!         Ok(vec![
//!             RawMorpheme::new("食べ", "動詞", "自立"),
//!             RawMorpheme::new("た", "助動詞", "*"),
//!             RawMorpheme::new("。", "記号", "句点"),
//!         ])
//!     }
//! }
//!
//! fn main() -> Result<(), wakachi_rs::Error> {
//!     let segmenter = Segmenter::new(Arc::new(Fixed))
//!         .with_options(SegmentOptions::default().with_full_breakdown(false));
//!     let tokens = segmenter.segment("食べた。")?;
//!     let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
//!     assert_eq!(surfaces, ["食べた", "。"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//! 1. [`annotate`] attaches offsets and the word-like flag to analyzer output.
//! 2. [`merge_tokens`] folds morphemes into [`Segment`]s using the ordered
//!    rule table [`MERGE_RULES`] through [`should_merge_forward`].
//! 3. [`Segmenter`] runs an [`Analyzer`], optionally skips merging
//!    (full-breakdown mode) and returns [`Token`]s. [`AnalyzerCell`] holds a
//!    process-wide analyzer that is configured exactly once.
//!
//! ## Offset Rules
//! Offsets are character indices (based on `str.chars()`), not byte indices.
//! Segments of one text are contiguous and cover it exactly once.
//!
//! ## Environment Variables
//! - `WAKACHI_FULL_BREAKDOWN`: default for [`SegmentOptions::full_breakdown`].
//! - `WAKACHI_VERIFY_SURFACES`: default for [`SegmentOptions::verify_surfaces`].

mod annotate;
mod category;
mod config;
mod constants;
mod error;
mod kana;
mod merge;
mod model;
mod rules;
mod runtime;

pub use annotate::{annotate, annotate_checked, verify_surfaces};
pub use category::Category;
pub use config::{SegmentOptions, FULL_BREAKDOWN_ENV, VERIFY_SURFACES_ENV};
pub use constants::*;
pub use error::{Error, Result};
pub use merge::merge_tokens;
pub use model::{Morpheme, RawMorpheme, Segment, Token};
pub use rules::{
    explain_merge, first_match, should_merge_forward, MergeRule, RuleCondition, RuleGroup,
    Verdict, DISABLED_NUMERIC_RULES, MERGE_RULES,
};
pub use runtime::{Analyzer, AnalyzerCell, Segmenter};

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;
