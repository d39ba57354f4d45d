use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech of a morpheme.
///
/// Parsed from the analyzer's label. Both IPADIC-style (`接頭詞`) and
/// UniDic-style (`接頭辞`, `補助記号`) labels are recognized; anything else is
/// kept verbatim in [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 名詞, also UniDic 代名詞.
    Noun,
    /// 動詞.
    Verb,
    /// 形容詞, also UniDic 形状詞.
    Adjective,
    /// 副詞.
    Adverb,
    /// 連体詞.
    Adnominal,
    /// 接続詞.
    Conjunction,
    /// 感動詞.
    Interjection,
    /// 助詞.
    Particle,
    /// 助動詞.
    AuxiliaryVerb,
    /// 接頭詞 / 接頭辞.
    Prefix,
    /// 接尾辞.
    Suffix,
    /// 記号 / 補助記号 / 空白.
    Symbol,
    /// フィラー.
    Filler,
    /// Unrecognized label.
    Other(String),
}

impl Category {
    /// Parses an analyzer label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "名詞" | "代名詞" => Category::Noun,
            "動詞" => Category::Verb,
            "形容詞" | "形状詞" => Category::Adjective,
            "副詞" => Category::Adverb,
            "連体詞" => Category::Adnominal,
            "接続詞" => Category::Conjunction,
            "感動詞" => Category::Interjection,
            "助詞" => Category::Particle,
            "助動詞" => Category::AuxiliaryVerb,
            "接頭詞" | "接頭辞" => Category::Prefix,
            "接尾辞" => Category::Suffix,
            "記号" | "補助記号" | "空白" => Category::Symbol,
            "フィラー" => Category::Filler,
            other => Category::Other(other.to_string()),
        }
    }

    /// Label in IPADIC spelling, or the original label for `Other`.
    pub fn label(&self) -> &str {
        match self {
            Category::Noun => "名詞",
            Category::Verb => "動詞",
            Category::Adjective => "形容詞",
            Category::Adverb => "副詞",
            Category::Adnominal => "連体詞",
            Category::Conjunction => "接続詞",
            Category::Interjection => "感動詞",
            Category::Particle => "助詞",
            Category::AuxiliaryVerb => "助動詞",
            Category::Prefix => "接頭詞",
            Category::Suffix => "接尾辞",
            Category::Symbol => "記号",
            Category::Filler => "フィラー",
            Category::Other(label) => label,
        }
    }

    /// False only for punctuation and symbols.
    pub fn is_word_like(&self) -> bool {
        !matches!(self, Category::Symbol)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from_label(value)
    }
}
