use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::annotate::{annotate, annotate_checked};
use crate::config::SegmentOptions;
use crate::error::{Error, Result};
use crate::merge::merge_tokens;
use crate::model::{Morpheme, RawMorpheme, Segment, Token};

/// External morphological analyzer.
///
/// Implementations return morphemes in text order whose surfaces concatenate
/// back to `text`. Errors are handed to the caller unchanged.
pub trait Analyzer {
    /// Error reported by the analyzer (dictionary loading, I/O, ...).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Splits `text` into morphemes.
    fn analyze(&self, text: &str) -> std::result::Result<Vec<RawMorpheme>, Self::Error>;
}

struct Loaded<A, C> {
    config: C,
    analyzer: Arc<A>,
}

/// Process-wide, initialize-once slot for an analyzer.
///
/// The first successful [`AnalyzerCell::get_or_init`] fixes the
/// configuration. Later calls that omit the configuration, or pass an equal
/// one, share the same analyzer; a different configuration is rejected with
/// [`Error::ConfigConflict`]. Meant to live in a `static`:
///
/// ```
/// use wakachi_rs::AnalyzerCell;
///
/// struct MyAnalyzer;
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct MyConfig {
///     dictionary: String,
/// }
///
/// static ANALYZER: AnalyzerCell<MyAnalyzer, MyConfig> = AnalyzerCell::new();
/// assert!(!ANALYZER.is_initialized());
/// ```
pub struct AnalyzerCell<A, C> {
    slot: Mutex<Option<Loaded<A, C>>>,
}

impl<A, C> AnalyzerCell<A, C> {
    /// Creates an empty cell.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Returns whether an analyzer has been stored.
    pub fn is_initialized(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }
}

impl<A, C> AnalyzerCell<A, C>
where
    C: Clone + Default + PartialEq + fmt::Debug,
{
    /// Returns the shared analyzer, building it with `init` on first use.
    ///
    /// `None` stands for `C::default()` on first use and for "whatever is
    /// already configured" afterwards. A failing `init` leaves the cell
    /// empty, so a later call may retry.
    pub fn get_or_init<F, E>(&self, config: Option<&C>, init: F) -> Result<Arc<A>>
    where
        F: FnOnce(&C) -> std::result::Result<A, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let mut guard = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(loaded) = guard.as_ref() {
            if let Some(requested) = config {
                if *requested != loaded.config {
                    warn!(
                        existing = ?loaded.config,
                        requested = ?requested,
                        "analyzer configuration conflict"
                    );
                    return Err(Error::ConfigConflict {
                        existing: format!("{:?}", loaded.config),
                        requested: format!("{requested:?}"),
                    });
                }
            }
            return Ok(Arc::clone(&loaded.analyzer));
        }

        let config = config.cloned().unwrap_or_default();
        debug!(config = ?config, "initializing analyzer");
        let analyzer = Arc::new(init(&config).map_err(Error::analyzer)?);
        *guard = Some(Loaded {
            config,
            analyzer: Arc::clone(&analyzer),
        });
        Ok(analyzer)
    }

    /// Configuration the stored analyzer was built with.
    pub fn config(&self) -> Option<C> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .map(|loaded| loaded.config.clone())
    }
}

impl<A, C> Default for AnalyzerCell<A, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs an [`Analyzer`] and turns its output into learner-sized tokens.
pub struct Segmenter<A> {
    analyzer: Arc<A>,
    options: SegmentOptions,
}

impl<A> Clone for Segmenter<A> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
            options: self.options,
        }
    }
}

impl<A: Analyzer> Segmenter<A> {
    /// Wraps an analyzer with [`SegmentOptions::default`].
    pub fn new(analyzer: Arc<A>) -> Self {
        Self {
            analyzer,
            options: SegmentOptions::default(),
        }
    }

    /// Builds a segmenter around the analyzer held by `cell`.
    ///
    /// See [`AnalyzerCell::get_or_init`] for how `config` is matched.
    pub fn from_cell<C, F, E>(
        cell: &AnalyzerCell<A, C>,
        config: Option<&C>,
        init: F,
    ) -> Result<Self>
    where
        C: Clone + Default + PartialEq + fmt::Debug,
        F: FnOnce(&C) -> std::result::Result<A, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        cell.get_or_init(config, init).map(Self::new)
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: SegmentOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> SegmentOptions {
        self.options
    }

    /// Underlying analyzer.
    pub fn analyzer(&self) -> &Arc<A> {
        &self.analyzer
    }

    /// Annotated morphemes of `text`, one per analyzer morpheme.
    pub fn breakdown(&self, text: &str) -> Result<Vec<Morpheme>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let raw = self.analyzer.analyze(text).map_err(Error::analyzer)?;
        if self.options.verify_surfaces {
            annotate_checked(text, raw)
        } else {
            Ok(annotate(raw))
        }
    }

    /// Merged segments of `text`.
    pub fn merged(&self, text: &str) -> Result<Vec<Segment>> {
        Ok(merge_tokens(self.breakdown(text)?))
    }

    /// Tokens of `text`, merged unless full-breakdown mode is on.
    ///
    /// Analyzer failures come back as [`Error::Analyzer`] holding the
    /// analyzer's own error; `downcast_ref::<A::Error>()` on the boxed value
    /// recovers it.
    pub fn segment(&self, text: &str) -> Result<Vec<Token>> {
        if self.options.full_breakdown {
            Ok(self.breakdown(text)?.into_iter().map(Token::from).collect())
        } else {
            Ok(self.merged(text)?.into_iter().map(Token::from).collect())
        }
    }
}
