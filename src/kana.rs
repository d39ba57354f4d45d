//! Script helpers used by the merge rules.

use std::sync::OnceLock;

use regex::Regex;

/// Vowel row of a kana mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

const A_ROW: &str = "あかさたなはまやらわがざだばぱぁゃゎ";
const I_ROW: &str = "いきしちにひみりぎじぢびぴぃ";
const U_ROW: &str = "うくすつぬふむゆるぐずづぶぷぅゅ";
const E_ROW: &str = "えけせてねへめれげぜでべぺぇ";
const O_ROW: &str = "おこそとのほもよろをごぞどぼぽぉょ";

fn katakana_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\p{Katakana}[\p{Katakana}ー]*$").expect("katakana pattern is valid")
    })
}

fn laugh_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:w{1,5}|W{1,5}|ｗ{1,5}|Ｗ{1,5})$").expect("laugh pattern is valid")
    })
}

/// Maps katakana to the matching hiragana; other characters pass through.
fn to_hiragana(ch: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&ch) {
        char::from_u32(ch as u32 - 0x60).unwrap_or(ch)
    } else {
        ch
    }
}

/// Vowel row of `ch`, for hiragana and full-width katakana.
///
/// `っ`, `ん` and the long-vowel mark have no row.
pub(crate) fn vowel_of(ch: char) -> Option<Vowel> {
    let ch = to_hiragana(ch);
    if A_ROW.contains(ch) {
        Some(Vowel::A)
    } else if I_ROW.contains(ch) {
        Some(Vowel::I)
    } else if U_ROW.contains(ch) {
        Some(Vowel::U)
    } else if E_ROW.contains(ch) {
        Some(Vowel::E)
    } else if O_ROW.contains(ch) {
        Some(Vowel::O)
    } else {
        None
    }
}

/// Vowel row of the last character of `text`.
pub(crate) fn last_vowel(text: &str) -> Option<Vowel> {
    text.chars().last().and_then(vowel_of)
}

pub(crate) fn ends_with_any(text: &str, chars: &[char]) -> bool {
    text.chars().last().map_or(false, |last| chars.contains(&last))
}

/// Whole text is katakana (the long-vowel mark allowed after the first char).
pub(crate) fn is_katakana(text: &str) -> bool {
    katakana_run().is_match(text)
}

/// One to five repetitions of a single laugh letter (`w`, `W`, `ｗ`, `Ｗ`).
pub(crate) fn is_laugh_run(text: &str) -> bool {
    laugh_run().is_match(text)
}

/// Trailing laugh letters of `text`, empty when it ends in anything else.
pub(crate) fn trailing_laugh(text: &str) -> &str {
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, ch)| matches!(ch, 'w' | 'W' | 'ｗ' | 'Ｗ'))
        .last()
        .map_or(text.len(), |(index, _)| index);
    &text[start..]
}
