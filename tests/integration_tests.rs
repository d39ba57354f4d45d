use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use wakachi_rs::{
    Analyzer, AnalyzerCell, Category, Error, RawMorpheme, SegmentOptions, Segmenter, Token,
};

#[derive(Debug)]
struct NotInFixture(String);

impl fmt::Display for NotInFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no fixture for {:?}", self.0)
    }
}

impl std::error::Error for NotInFixture {}

/// Serves hand-written IPADIC-style analyses.
struct FixtureAnalyzer {
    analyses: HashMap<&'static str, Vec<(&'static str, &'static str, &'static str, &'static str)>>,
}

impl FixtureAnalyzer {
    fn new() -> Self {
        let mut analyses = HashMap::new();
        analyses.insert(
            "食べた。",
            vec![
                ("食べ", "動詞", "自立", "タベ"),
                ("た", "助動詞", "*", "タ"),
                ("。", "記号", "句点", "。"),
            ],
        );
        analyses.insert(
            "食べられちゃったんだよ！",
            vec![
                ("食べ", "動詞", "自立", "タベ"),
                ("られ", "動詞", "接尾", "ラレ"),
                ("ちゃっ", "動詞", "非自立", "チャッ"),
                ("た", "助動詞", "*", "タ"),
                ("ん", "名詞", "非自立", "ン"),
                ("だ", "助動詞", "*", "ダ"),
                ("よ", "助詞", "終助詞", "ヨ"),
                ("！", "記号", "一般", "！"),
            ],
        );
        analyses.insert(
            "田中さんはコーヒーをチェックしてくれました",
            vec![
                ("田中", "名詞", "固有名詞", "タナカ"),
                ("さん", "名詞", "接尾", "サン"),
                ("は", "助詞", "係助詞", "ハ"),
                ("コーヒ", "名詞", "一般", "コーヒ"),
                ("ー", "記号", "一般", "ー"),
                ("を", "助詞", "格助詞", "ヲ"),
                ("チェック", "名詞", "サ変接続", "チェック"),
                ("し", "動詞", "自立", "シ"),
                ("て", "助詞", "接続助詞", "テ"),
                ("くれ", "動詞", "非自立", "クレ"),
                ("まし", "助動詞", "*", "マシ"),
                ("た", "助動詞", "*", "タ"),
            ],
        );
        analyses.insert(
            "食べてくれた",
            vec![
                ("食べ", "動詞", "自立", "タベ"),
                ("て", "助詞", "接続助詞", "テ"),
                ("くれ", "動詞", "非自立", "クレ"),
                ("た", "助動詞", "*", "タ"),
            ],
        );
        analyses.insert(
            "お待ちください",
            vec![
                ("お", "接頭詞", "名詞接続", "オ"),
                ("待ち", "動詞", "自立", "マチ"),
                ("ください", "動詞", "非自立", "クダサイ"),
            ],
        );
        Self { analyses }
    }
}

impl Analyzer for FixtureAnalyzer {
    type Error = NotInFixture;

    fn analyze(&self, text: &str) -> Result<Vec<RawMorpheme>, Self::Error> {
        let parts = self
            .analyses
            .get(text)
            .ok_or_else(|| NotInFixture(text.to_string()))?;
        Ok(parts
            .iter()
            .map(|(surface, category, detail, reading)| {
                RawMorpheme::new(*surface, *category, *detail).with_reading(*reading)
            })
            .collect())
    }
}

fn segmenter(full_breakdown: bool) -> Segmenter<FixtureAnalyzer> {
    Segmenter::new(Arc::new(FixtureAnalyzer::new())).with_options(SegmentOptions {
        full_breakdown,
        verify_surfaces: true,
    })
}

fn surfaces(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.surface.as_str()).collect()
}

#[test]
fn past_tense_sentence() {
    let tokens = segmenter(false).segment("食べた。").expect("segment");
    assert_eq!(surfaces(&tokens), vec!["食べた", "。"]);
    assert_eq!(tokens[0].reading, "タベタ");
    assert!(tokens[0].is_word_like);
    assert!(!tokens[1].is_word_like);
}

#[test]
fn colloquial_passive_chain() {
    let tokens = segmenter(false)
        .segment("食べられちゃったんだよ！")
        .expect("segment");
    assert_eq!(
        surfaces(&tokens),
        vec!["食べられちゃった", "ん", "だ", "よ", "！"]
    );
    assert_eq!(tokens[0].morphemes.len(), 4);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 8));
    assert_eq!((tokens[4].start, tokens[4].end), (11, 12));
}

#[test]
fn full_breakdown_is_longer_than_merged() {
    let merged = segmenter(false).segment("食べた。").expect("merged");
    let breakdown = segmenter(true).segment("食べた。").expect("breakdown");
    assert!(breakdown.len() > merged.len());
    assert_eq!(surfaces(&breakdown), vec!["食べ", "た", "。"]);
    assert!(breakdown.iter().all(|token| token.morphemes.len() == 1));
}

#[test]
fn empty_text_yields_nothing() {
    assert!(segmenter(false).segment("").expect("empty").is_empty());
    assert!(segmenter(true).segment("").expect("empty").is_empty());
}

#[test]
fn names_loanwords_and_light_verbs() {
    let tokens = segmenter(false)
        .segment("田中さんはコーヒーをチェックしてくれました")
        .expect("segment");
    assert_eq!(
        surfaces(&tokens),
        vec![
            "田中さん",
            "は",
            "コーヒー",
            "を",
            "チェックし",
            "て",
            "くれました"
        ]
    );
}

#[test]
fn te_form_helper_joins_verb_chain() {
    let tokens = segmenter(false).segment("食べてくれた").expect("segment");
    assert_eq!(surfaces(&tokens), vec!["食べてくれた"]);
    assert_eq!(tokens[0].category, Category::Verb);
}

#[test]
fn polite_prefix_does_not_swallow_verbs() {
    let tokens = segmenter(false).segment("お待ちください").expect("segment");
    assert_eq!(surfaces(&tokens), vec!["お", "待ち", "ください"]);
}

#[test]
fn analyzer_failures_reach_the_caller() {
    let error = segmenter(false)
        .segment("未登録")
        .expect_err("missing fixture");
    assert!(matches!(error, Error::Analyzer(_)));
    assert_eq!(error.to_string(), "no fixture for \"未登録\"");

    let Error::Analyzer(source) = error else {
        panic!("analyzer error expected");
    };
    let original = source
        .downcast_ref::<NotInFixture>()
        .expect("original analyzer error");
    assert_eq!(original.0, "未登録");
}

#[derive(Debug, Clone, Default, PartialEq)]
struct FixtureConfig {
    dictionary: &'static str,
}

static ANALYZER: AnalyzerCell<FixtureAnalyzer, FixtureConfig> = AnalyzerCell::new();

#[test]
fn global_analyzer_is_configured_once() {
    let ipadic = FixtureConfig {
        dictionary: "ipadic",
    };
    let unidic = FixtureConfig {
        dictionary: "unidic",
    };

    let first = Segmenter::from_cell(&ANALYZER, Some(&ipadic), |_| {
        Ok::<_, NotInFixture>(FixtureAnalyzer::new())
    })
    .expect("first initialization");
    let again = Segmenter::from_cell(&ANALYZER, Some(&ipadic), |_| {
        Ok::<_, NotInFixture>(FixtureAnalyzer::new())
    })
    .expect("same configuration");
    let omitted = Segmenter::from_cell(&ANALYZER, None, |_| {
        Ok::<_, NotInFixture>(FixtureAnalyzer::new())
    })
    .expect("omitted configuration");
    assert!(Arc::ptr_eq(first.analyzer(), again.analyzer()));
    assert!(Arc::ptr_eq(first.analyzer(), omitted.analyzer()));

    let conflict = Segmenter::from_cell(&ANALYZER, Some(&unidic), |_| {
        Ok::<_, NotInFixture>(FixtureAnalyzer::new())
    });
    assert!(matches!(conflict, Err(Error::ConfigConflict { .. })));
    assert_eq!(ANALYZER.config(), Some(ipadic));
}
