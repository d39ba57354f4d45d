use std::env;

/// Environment variable that turns on full-breakdown mode by default.
pub const FULL_BREAKDOWN_ENV: &str = "WAKACHI_FULL_BREAKDOWN";
/// Environment variable that turns on surface verification by default.
pub const VERIFY_SURFACES_ENV: &str = "WAKACHI_VERIFY_SURFACES";

/// Per-call options of [`crate::Segmenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Return annotated morphemes one-to-one instead of merged segments.
    pub full_breakdown: bool,
    /// Reject analyzer output whose surfaces do not rebuild the input.
    pub verify_surfaces: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            full_breakdown: env_flag(FULL_BREAKDOWN_ENV),
            verify_surfaces: env_flag(VERIFY_SURFACES_ENV),
        }
    }
}

impl SegmentOptions {
    /// Sets full-breakdown mode.
    pub fn with_full_breakdown(mut self, full_breakdown: bool) -> Self {
        self.full_breakdown = full_breakdown;
        self
    }

    /// Sets surface verification.
    pub fn with_verify_surfaces(mut self, verify_surfaces: bool) -> Self {
        self.verify_surfaces = verify_surfaces;
        self
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|value| parse_flag(&value))
        .unwrap_or(false)
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
