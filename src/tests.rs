use crate::config::parse_flag;
use crate::test_support::{morphemes, with_env_vars};
use crate::{
    merge_tokens, SegmentOptions, Token, FULL_BREAKDOWN_ENV, IDIOMS, MERGE_RULES,
    VERIFY_SURFACES_ENV,
};

#[test]
fn segment_options_default_is_merged_and_lenient() {
    with_env_vars(
        &[(FULL_BREAKDOWN_ENV, None), (VERIFY_SURFACES_ENV, None)],
        || {
            let options = SegmentOptions::default();
            assert!(!options.full_breakdown);
            assert!(!options.verify_surfaces);
        },
    );
}

#[test]
fn segment_options_default_respects_environment() {
    with_env_vars(
        &[
            (FULL_BREAKDOWN_ENV, Some("true")),
            (VERIFY_SURFACES_ENV, Some("1")),
        ],
        || {
            let options = SegmentOptions::default();
            assert!(options.full_breakdown);
            assert!(options.verify_surfaces);
        },
    );
}

#[test]
fn builders_override_environment() {
    with_env_vars(&[(FULL_BREAKDOWN_ENV, Some("on"))], || {
        let options = SegmentOptions::default().with_full_breakdown(false);
        assert!(!options.full_breakdown);
    });
}

#[test]
fn flag_values_are_case_insensitive() {
    for value in ["1", "true", "TRUE", " Yes ", "on"] {
        assert!(parse_flag(value), "{value:?} should enable");
    }
    for value in ["", "0", "false", "off", "enabled"] {
        assert!(!parse_flag(value), "{value:?} should not enable");
    }
}

#[test]
fn rule_table_is_exported() {
    assert!(!MERGE_RULES.is_empty());
    assert!(IDIOMS.contains(&"仕方がない"));
}

#[test]
fn token_serializes_with_absorbed_morphemes() {
    let segments = merge_tokens(morphemes(&[("食べ", "動詞", "自立"), ("た", "助動詞", "*")]));
    let token = Token::from(segments.into_iter().next().expect("one segment"));
    let json = serde_json::to_value(&token).expect("serializable token");

    assert_eq!(json["surface"], "食べた");
    assert_eq!(json["category"], "Verb");
    assert_eq!(json["start"], 0);
    assert_eq!(json["end"], 3);
    assert_eq!(json["morphemes"][1]["surface"], "た");
    assert_eq!(json["morphemes"][1]["category"], "AuxiliaryVerb");
}
