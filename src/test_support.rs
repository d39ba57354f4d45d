use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, OnceLock};

use crate::annotate::annotate;
use crate::model::{Morpheme, RawMorpheme, Segment};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn set_env_var(key: &str, value: impl AsRef<std::ffi::OsStr>) {
    #[allow(unused_unsafe)]
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env_var(key: &str) {
    #[allow(unused_unsafe)]
    unsafe {
        env::remove_var(key);
    }
}

/// Runs a closure while holding a global environment lock and applying overrides.
pub(crate) fn with_env_vars<T>(overrides: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _guard = env_lock()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let backups: Vec<(&str, Option<OsString>)> = overrides
        .iter()
        .map(|(key, _)| (*key, env::var_os(key)))
        .collect();

    for (key, value) in overrides {
        match value {
            Some(value) => set_env_var(key, value),
            None => remove_env_var(key),
        }
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (key, value) in backups.into_iter().rev() {
        match value {
            Some(value) => set_env_var(key, value),
            None => remove_env_var(key),
        }
    }

    match result {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

/// `(surface, category, detail)` triples as raw analyzer output.
pub(crate) fn raw(parts: &[(&str, &str, &str)]) -> Vec<RawMorpheme> {
    parts
        .iter()
        .map(|(surface, category, detail)| RawMorpheme::new(*surface, *category, *detail))
        .collect()
}

/// Annotated morphemes for `(surface, category, detail)` triples.
pub(crate) fn morphemes(parts: &[(&str, &str, &str)]) -> Vec<Morpheme> {
    annotate(raw(parts))
}

/// Single morpheme placed at offset 0.
pub(crate) fn morpheme(surface: &str, category: &str, detail: &str) -> Morpheme {
    morphemes(&[(surface, category, detail)]).remove(0)
}

/// Accumulator built by absorbing every part, regardless of the rules.
pub(crate) fn segment(parts: &[(&str, &str, &str)]) -> Segment {
    let mut parts = morphemes(parts).into_iter();
    let head = parts.next().expect("segment needs at least one part");
    let mut segment = Segment::open(head);
    for part in parts {
        segment.absorb(part);
    }
    segment
}
