//! Word lists consulted by the merge rules.

/// Politeness prefixes that never attach to a following non-noun.
pub const POLITE_PREFIXES: &[&str] = &["お", "ご", "御"];

/// Polite auxiliary forms following a verb stem.
pub const POLITE_AUXILIARIES: &[&str] = &[
    "ます",
    "まし",
    "ませ",
    "ません",
    "ましょ",
    "ましょう",
    "ました",
];

/// Progressive and contracted auxiliaries (`〜てる`, `〜ちゃう`, `〜とく`).
pub const CONTRACTION_AUXILIARIES: &[&str] = &[
    "てる", "てた", "でる", "でた", "ちゃう", "ちゃっ", "ちゃい", "ちゃ", "じゃう",
    "じゃっ", "じゃ", "とく", "とい", "どく", "どい", "てく", "てっ", "てか", "てき",
];

/// Helper verbs following a te-form (giving, receiving, aspect).
pub const TE_FORM_HELPERS: &[&str] = &[
    "あげ", "あげる", "くれ", "くれる", "もらう", "もらっ", "もらい", "もらえ", "やる", "やっ",
    "いただく", "いただき", "いただい", "くださる", "ください", "くださっ", "いる", "い", "おく",
    "おい", "しまう", "しまっ", "みる", "み", "みた", "いく", "いっ", "くる", "き", "きた",
];

/// Conjunctive particles that turn a verb stem into its te-form.
pub const TE_CONNECTIVES: &[&str] = &["て", "で"];

/// Formal nouns that close a verb phrase.
pub const LIGHT_NOMINALIZERS: &[&str] = &["こと", "もの", "ところ"];

/// Colloquial sentence enders glued to the preceding word.
pub const COLLOQUIAL_ENDERS: &[&str] = &["っけ", "じゃん", "かしら", "っしょ", "っす"];

/// Long-vowel mark.
pub const LONG_VOWEL_MARK: &str = "ー";

/// Auxiliary surfaces that attach to a verb or adjective stem.
pub const AUXILIARY_SURFACES: &[&str] = &[
    "ない",
    "なかっ",
    "なく",
    "なけれ",
    "ず",
    "ぬ",
    "たい",
    "たかっ",
    "たく",
    "たけれ",
    "う",
    "よう",
    "まい",
    "せる",
    "させる",
    "させ",
];

/// Conjectural ending guarded by the stem vowel check.
pub const CONJECTURAL_ENDING: &str = "う";

/// Passive/potential suffix after a godan stem (a-row).
pub const PASSIVE_SUFFIXES: &[&str] = &["れる", "れ", "れた", "れて", "れない"];

/// Passive/potential suffix after an ichidan stem (i/e-row).
pub const RARERU_SUFFIXES: &[&str] = &["られる", "られ", "られた", "られて", "られない"];

/// Past and te endings that follow `っ`/`い`/`し` stems.
pub const PAST_ENDINGS: &[&str] = &["た", "たら", "たり"];

/// Voiced past endings that follow `ん`/`い` stems.
pub const VOICED_PAST_ENDINGS: &[&str] = &["だ", "だら", "だり"];

/// Conjunctive stem endings that take `た`.
pub const PAST_STEM_ENDINGS: &[char] = &['っ', 'い', 'し'];

/// Conjunctive stem endings that take `だ`.
pub const VOICED_PAST_STEM_ENDINGS: &[char] = &['ん', 'い'];

/// Suffixes that stay attached to a noun.
pub const NOUN_SUFFIXES: &[&str] = &[
    "たち", "達", "ら", "ども", "的", "化", "性", "用", "中", "別", "等", "屋", "家", "者",
    "式", "感", "風", "製", "産", "語", "人",
];

/// Nominalizers after an adjective stem.
pub const ADJECTIVE_NOMINALIZERS: &[&str] = &["さ", "み"];

/// Honorific titles after a name.
pub const HONORIFIC_TITLES: &[&str] = &[
    "さん", "様", "さま", "ちゃん", "くん", "君", "先生", "氏", "殿", "先輩",
];

/// Hearsay and similarity endings.
pub const RESEMBLANCE_ENDINGS: &[&str] = &[
    "っぽい",
    "っぽく",
    "っぽかっ",
    "みたい",
    "らしい",
    "らしく",
    "らしかっ",
];

/// Stem terminator for geminate continuations.
pub const GEMINATE_MARK: char = 'っ';

/// Morae completing a geminate stem.
pub const GEMINATE_CONTINUATIONS: &[&str] = &["た", "て", "ちゃ", "ちゃう", "たら", "たり"];

/// Prefixes merged into a following noun or verb, besides the 接頭詞 category.
pub const KNOWN_PREFIXES: &[&str] = &[
    "お", "ご", "御", "不", "未", "非", "無", "超", "再", "各", "全", "新", "旧", "真", "大", "小",
];

/// Surfaces of the light verb する.
pub const SURU_FORMS: &[&str] = &[
    "する", "し", "さ", "せ", "すれ", "しろ", "せよ", "しよ", "しよう", "して", "した",
];

/// Set phrases merged whenever the concatenation is still a prefix of one.
pub const IDIOMS: &[&str] = &[
    "仕方がない",
    "しょうがない",
    "気をつけて",
    "よろしくお願いします",
    "お願いします",
    "ありがとうございます",
    "おはようございます",
    "おめでとうございます",
    "いただきます",
    "ごちそうさま",
    "お疲れ様",
];

/// Explanatory-mood endings (`のだ` colloquialized).
pub const EXPLANATORY_ENDINGS: &[&str] = &[
    "んだ",
    "んです",
    "んだろう",
    "んでしょう",
    "んじゃ",
    "んだっけ",
    "えだ",
    "えです",
];

/// Category detail for derivational suffixes in IPADIC (`名詞,接尾`, `動詞,接尾`).
pub const SUFFIX_DETAIL: &str = "接尾";

/// Category details that mark a noun as a name.
pub const NAME_DETAILS: &[&str] = &["固有名詞", "人名", "代名詞"];

/// Category detail for numbers (`名詞,数`).
pub const NUMBER_DETAIL: &str = "数";

/// Category detail for counters (`名詞,接尾,助数詞` / UniDic `助数詞`).
pub const COUNTER_DETAILS: &[&str] = &["助数詞", "助数詞可能"];

/// Decimal separators joined by the disabled numeric rules.
pub const DECIMAL_POINTS: &[&str] = &[".", "．", "・"];
