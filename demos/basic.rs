use std::convert::Infallible;
use std::sync::Arc;

use wakachi_rs::{Analyzer, RawMorpheme, SegmentOptions, Segmenter};

/// Stands in for a real analyzer with one canned IPADIC analysis.
struct Canned;

impl Analyzer for Canned {
    type Error = Infallible;

    fn analyze(&self, _text: &str) -> Result<Vec<RawMorpheme>, Infallible> {
        Ok([
            ("食べ", "動詞", "自立", "タベ"),
            ("られ", "動詞", "接尾", "ラレ"),
            ("ちゃっ", "動詞", "非自立", "チャッ"),
            ("た", "助動詞", "*", "タ"),
            ("ん", "名詞", "非自立", "ン"),
            ("だ", "助動詞", "*", "ダ"),
            ("よ", "助詞", "終助詞", "ヨ"),
            ("！", "記号", "一般", "！"),
        ]
        .into_iter()
        .map(|(surface, category, detail, reading)| {
            RawMorpheme::new(surface, category, detail).with_reading(reading)
        })
        .collect())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "食べられちゃったんだよ！";
    let segmenter = Segmenter::new(Arc::new(Canned));

    for full_breakdown in [false, true] {
        let options = SegmentOptions::default()
            .with_full_breakdown(full_breakdown)
            .with_verify_surfaces(true);
        let tokens = segmenter.clone().with_options(options).segment(text)?;

        println!("full_breakdown={full_breakdown}");
        for token in tokens {
            println!(
                "  {} / {} (reading={}, start={}, end={}, word={}, morphemes={})",
                token.surface,
                token.category,
                token.reading,
                token.start,
                token.end,
                token.is_word_like,
                token.morphemes.len()
            );
        }
    }

    Ok(())
}
