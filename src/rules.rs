//! Ordered merge rules.
//!
//! [`MERGE_RULES`] is scanned top to bottom and the first rule whose
//! condition holds decides. Specific exceptions therefore sit above the
//! general rules they override: the idiom rule may glue `仕方` + `が` even
//! though a later rule refuses every particle.
//!
//! Category conditions read the accumulator's head category (the first
//! absorbed morpheme). Stem conditions read the accumulated surface, and
//! prefix conditions read the most recently absorbed morpheme.

use std::fmt;

use crate::category::Category;
use crate::constants::{
    ADJECTIVE_NOMINALIZERS, AUXILIARY_SURFACES, COLLOQUIAL_ENDERS, CONJECTURAL_ENDING,
    CONTRACTION_AUXILIARIES, COUNTER_DETAILS, DECIMAL_POINTS, EXPLANATORY_ENDINGS,
    GEMINATE_CONTINUATIONS, GEMINATE_MARK, HONORIFIC_TITLES, IDIOMS, KNOWN_PREFIXES,
    LIGHT_NOMINALIZERS, LONG_VOWEL_MARK, NAME_DETAILS, NOUN_SUFFIXES, NUMBER_DETAIL,
    PASSIVE_SUFFIXES, PAST_ENDINGS, PAST_STEM_ENDINGS, POLITE_AUXILIARIES, POLITE_PREFIXES,
    RARERU_SUFFIXES, RESEMBLANCE_ENDINGS, SUFFIX_DETAIL, SURU_FORMS, TE_CONNECTIVES,
    TE_FORM_HELPERS, VOICED_PAST_ENDINGS, VOICED_PAST_STEM_ENDINGS,
};
use crate::kana::{
    ends_with_any, is_katakana, is_laugh_run, last_vowel, trailing_laugh, Vowel,
};
use crate::model::{Morpheme, Segment};

/// Family a rule belongs to. Families appear in this order in [`MERGE_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleGroup {
    /// Exceptions checked before anything else.
    Blocklist,
    /// Verb stem continuations.
    VerbChain,
    /// Sentence-final glue.
    SentenceFinal,
    /// Auxiliaries, suffixes and conjugation endings.
    Morphology,
    /// Noun and adjective glue.
    NounAdjective,
    /// Explicit refusals.
    DefaultDeny,
    /// Number and counter joining; only in [`DISABLED_NUMERIC_RULES`].
    Numeric,
}

/// Outcome of a matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Absorb the morpheme into the accumulator.
    Merge,
    /// Close the accumulator and open a new segment.
    Keep,
}

impl Verdict {
    /// Whether this verdict absorbs the morpheme.
    pub fn merges(self) -> bool {
        matches!(self, Verdict::Merge)
    }
}

/// Condition over `(accumulator, next morpheme)`.
pub type RuleCondition = fn(&Segment, &Morpheme) -> bool;

/// One entry of a rule table.
#[derive(Clone, Copy)]
pub struct MergeRule {
    /// Stable identifier, used in logs and [`explain_merge`].
    pub name: &'static str,
    /// Rule family.
    pub group: RuleGroup,
    /// Decision taken when the condition holds.
    pub verdict: Verdict,
    /// Condition.
    pub applies: RuleCondition,
}

impl fmt::Debug for MergeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeRule")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("verdict", &self.verdict)
            .finish_non_exhaustive()
    }
}

impl MergeRule {
    const fn merge(name: &'static str, group: RuleGroup, applies: RuleCondition) -> Self {
        Self {
            name,
            group,
            verdict: Verdict::Merge,
            applies,
        }
    }

    const fn keep(name: &'static str, group: RuleGroup, applies: RuleCondition) -> Self {
        Self {
            name,
            group,
            verdict: Verdict::Keep,
            applies,
        }
    }

    /// Evaluates the condition.
    pub fn matches(&self, prev: &Segment, curr: &Morpheme) -> bool {
        (self.applies)(prev, curr)
    }
}

/// Active rules, in evaluation order.
pub static MERGE_RULES: &[MergeRule] = &[
    MergeRule::keep(
        "polite_prefix_before_non_noun",
        RuleGroup::Blocklist,
        polite_prefix_before_non_noun,
    ),
    MergeRule::merge("polite_auxiliary", RuleGroup::VerbChain, polite_auxiliary),
    MergeRule::merge(
        "contraction_auxiliary",
        RuleGroup::VerbChain,
        contraction_auxiliary,
    ),
    MergeRule::merge("te_connective", RuleGroup::VerbChain, te_connective),
    MergeRule::merge("te_form_helper", RuleGroup::VerbChain, te_form_helper),
    MergeRule::merge(
        "light_nominalizer",
        RuleGroup::VerbChain,
        light_nominalizer,
    ),
    MergeRule::merge(
        "colloquial_ender",
        RuleGroup::SentenceFinal,
        colloquial_ender,
    ),
    MergeRule::merge(
        "long_vowel_after_katakana",
        RuleGroup::SentenceFinal,
        long_vowel_after_katakana,
    ),
    MergeRule::merge("laugh_filler", RuleGroup::SentenceFinal, laugh_filler),
    MergeRule::merge(
        "auxiliary_after_verb",
        RuleGroup::Morphology,
        auxiliary_after_verb,
    ),
    MergeRule::merge(
        "derivational_suffix",
        RuleGroup::Morphology,
        derivational_suffix,
    ),
    MergeRule::merge(
        "conjectural_ending",
        RuleGroup::Morphology,
        conjectural_ending,
    ),
    MergeRule::merge(
        "auxiliary_surface",
        RuleGroup::Morphology,
        auxiliary_surface,
    ),
    MergeRule::merge(
        "passive_potential",
        RuleGroup::Morphology,
        passive_potential,
    ),
    MergeRule::merge("past_ending", RuleGroup::Morphology, past_ending),
    MergeRule::merge("noun_suffix", RuleGroup::NounAdjective, noun_suffix),
    MergeRule::merge(
        "adjective_nominalizer",
        RuleGroup::NounAdjective,
        adjective_nominalizer,
    ),
    MergeRule::merge(
        "honorific_title",
        RuleGroup::NounAdjective,
        honorific_title,
    ),
    MergeRule::merge(
        "resemblance_ending",
        RuleGroup::NounAdjective,
        resemblance_ending,
    ),
    MergeRule::merge(
        "geminate_continuation",
        RuleGroup::NounAdjective,
        geminate_continuation,
    ),
    MergeRule::merge(
        "prefix_before_content",
        RuleGroup::NounAdjective,
        prefix_before_content,
    ),
    MergeRule::merge("katakana_suru", RuleGroup::NounAdjective, katakana_suru),
    MergeRule::merge("idiom_prefix", RuleGroup::NounAdjective, idiom_prefix),
    MergeRule::merge(
        "explanatory_ending",
        RuleGroup::NounAdjective,
        explanatory_ending,
    ),
    MergeRule::keep("particle", RuleGroup::DefaultDeny, particle),
];

/// Number and counter joining, kept out of [`MERGE_RULES`].
///
/// [`should_merge_forward`] never consults this table. It can be evaluated on
/// its own with [`first_match`].
pub static DISABLED_NUMERIC_RULES: &[MergeRule] = &[
    MergeRule::merge("digit_run", RuleGroup::Numeric, digit_run),
    MergeRule::merge("decimal_point", RuleGroup::Numeric, decimal_point),
    MergeRule::merge("counter_after_number", RuleGroup::Numeric, counter_after_number),
];

/// Returns the first rule of `rules` whose condition holds.
pub fn first_match<'r>(
    rules: &'r [MergeRule],
    prev: &Segment,
    curr: &Morpheme,
) -> Option<&'r MergeRule> {
    rules.iter().find(|rule| rule.matches(prev, curr))
}

/// Whether `curr` should be absorbed into `prev`.
///
/// Pure: equal inputs always give equal answers. With no matching rule the
/// answer is `false`.
pub fn should_merge_forward(prev: &Segment, curr: &Morpheme) -> bool {
    first_match(MERGE_RULES, prev, curr).map_or(false, |rule| rule.verdict.merges())
}

/// Name of the rule that decides `(prev, curr)`, if any.
pub fn explain_merge(prev: &Segment, curr: &Morpheme) -> Option<&'static str> {
    first_match(MERGE_RULES, prev, curr).map(|rule| rule.name)
}

fn listed(list: &[&str], surface: &str) -> bool {
    list.contains(&surface)
}

fn head_is(prev: &Segment, category: Category) -> bool {
    prev.category == category
}

fn is_suffix(morpheme: &Morpheme) -> bool {
    morpheme.category == Category::Suffix || morpheme.detail == SUFFIX_DETAIL
}

fn is_prefix(morpheme: &Morpheme) -> bool {
    morpheme.category == Category::Prefix
        || (listed(KNOWN_PREFIXES, &morpheme.surface) && morpheme.detail.starts_with("接頭"))
}

fn is_number(morpheme: &Morpheme) -> bool {
    (morpheme.category == Category::Noun && morpheme.detail == NUMBER_DETAIL)
        || (!morpheme.surface.is_empty() && morpheme.surface.chars().all(char::is_numeric))
}

fn polite_prefix_before_non_noun(prev: &Segment, curr: &Morpheme) -> bool {
    prev.last_morpheme().map_or(false, |last| {
        is_prefix(last) && listed(POLITE_PREFIXES, &last.surface)
    }) && curr.category != Category::Noun
}

fn polite_auxiliary(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Verb) && listed(POLITE_AUXILIARIES, &curr.surface)
}

fn contraction_auxiliary(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Verb) && listed(CONTRACTION_AUXILIARIES, &curr.surface)
}

fn te_connective(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Verb)
        && curr.category == Category::Particle
        && curr.detail == "接続助詞"
        && listed(TE_CONNECTIVES, &curr.surface)
}

fn te_form_helper(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Verb)
        && curr.category == Category::Verb
        && ends_with_any(&prev.surface, &['て', 'で'])
        && listed(TE_FORM_HELPERS, &curr.surface)
}

fn light_nominalizer(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Verb) && listed(LIGHT_NOMINALIZERS, &curr.surface)
}

fn colloquial_ender(prev: &Segment, curr: &Morpheme) -> bool {
    prev.is_word_like && listed(COLLOQUIAL_ENDERS, &curr.surface)
}

fn long_vowel_after_katakana(prev: &Segment, curr: &Morpheme) -> bool {
    curr.surface == LONG_VOWEL_MARK && is_katakana(&prev.surface)
}

fn laugh_filler(prev: &Segment, curr: &Morpheme) -> bool {
    if !is_laugh_run(&curr.surface) {
        return false;
    }
    let tail = trailing_laugh(&prev.surface);
    if tail.is_empty() {
        prev.is_word_like
    } else {
        is_laugh_run(&format!("{}{}", tail, curr.surface))
    }
}

fn auxiliary_after_verb(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Verb) && curr.category == Category::AuxiliaryVerb
}

fn derivational_suffix(prev: &Segment, curr: &Morpheme) -> bool {
    (head_is(prev, Category::Verb) || head_is(prev, Category::Noun)) && is_suffix(curr)
}

fn conjectural_ending(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Verb)
        && curr.surface == CONJECTURAL_ENDING
        && last_vowel(&prev.surface) == Some(Vowel::O)
}

fn auxiliary_surface(prev: &Segment, curr: &Morpheme) -> bool {
    (head_is(prev, Category::Verb) || head_is(prev, Category::Adjective))
        && curr.surface != CONJECTURAL_ENDING
        && listed(AUXILIARY_SURFACES, &curr.surface)
}

fn passive_potential(prev: &Segment, curr: &Morpheme) -> bool {
    if !head_is(prev, Category::Verb) {
        return false;
    }
    let vowel = last_vowel(&prev.surface);
    (listed(PASSIVE_SUFFIXES, &curr.surface) && vowel == Some(Vowel::A))
        || (listed(RARERU_SUFFIXES, &curr.surface)
            && matches!(vowel, Some(Vowel::I) | Some(Vowel::E)))
}

fn past_ending(prev: &Segment, curr: &Morpheme) -> bool {
    if !head_is(prev, Category::Verb) {
        return false;
    }
    (listed(PAST_ENDINGS, &curr.surface) && ends_with_any(&prev.surface, PAST_STEM_ENDINGS))
        || (listed(VOICED_PAST_ENDINGS, &curr.surface)
            && ends_with_any(&prev.surface, VOICED_PAST_STEM_ENDINGS))
}

fn noun_suffix(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Noun) && (listed(NOUN_SUFFIXES, &curr.surface) || is_suffix(curr))
}

fn adjective_nominalizer(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Adjective) && listed(ADJECTIVE_NOMINALIZERS, &curr.surface)
}

fn honorific_title(prev: &Segment, curr: &Morpheme) -> bool {
    let name_like = head_is(prev, Category::Noun)
        && (NAME_DETAILS.contains(&prev.detail.as_str()) || is_katakana(&prev.surface));
    name_like && listed(HONORIFIC_TITLES, &curr.surface)
}

fn resemblance_ending(prev: &Segment, curr: &Morpheme) -> bool {
    prev.is_word_like && listed(RESEMBLANCE_ENDINGS, &curr.surface)
}

fn geminate_continuation(prev: &Segment, curr: &Morpheme) -> bool {
    ends_with_any(&prev.surface, &[GEMINATE_MARK]) && listed(GEMINATE_CONTINUATIONS, &curr.surface)
}

fn prefix_before_content(prev: &Segment, curr: &Morpheme) -> bool {
    prev.last_morpheme().map_or(false, is_prefix)
        && matches!(curr.category, Category::Noun | Category::Verb)
}

fn katakana_suru(prev: &Segment, curr: &Morpheme) -> bool {
    head_is(prev, Category::Noun)
        && is_katakana(&prev.surface)
        && curr.category == Category::Verb
        && listed(SURU_FORMS, &curr.surface)
}

fn idiom_prefix(prev: &Segment, curr: &Morpheme) -> bool {
    let joined = format!("{}{}", prev.surface, curr.surface);
    IDIOMS.iter().any(|idiom| idiom.starts_with(joined.as_str()))
}

fn explanatory_ending(prev: &Segment, curr: &Morpheme) -> bool {
    matches!(
        prev.category,
        Category::Verb | Category::Adjective | Category::Noun
    ) && listed(EXPLANATORY_ENDINGS, &curr.surface)
}

fn particle(_prev: &Segment, curr: &Morpheme) -> bool {
    curr.category == Category::Particle
}

fn digit_run(prev: &Segment, curr: &Morpheme) -> bool {
    prev.last_morpheme().map_or(false, is_number) && is_number(curr)
}

fn decimal_point(prev: &Segment, curr: &Morpheme) -> bool {
    let Some(last) = prev.last_morpheme() else {
        return false;
    };
    (is_number(last) && listed(DECIMAL_POINTS, &curr.surface))
        || (listed(DECIMAL_POINTS, &last.surface) && is_number(curr))
}

fn counter_after_number(prev: &Segment, curr: &Morpheme) -> bool {
    prev.last_morpheme().map_or(false, is_number)
        && COUNTER_DETAILS
            .iter()
            .any(|detail| curr.detail == *detail)
}
