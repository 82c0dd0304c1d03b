//! Typography normalization pipeline.
//!
//! Rewrites manuscript punctuation (quotes, dashes, ellipses, scene-break
//! markers) according to a locale/style profile. Normalization is a pure
//! text transformation: same input and profile always yield the same
//! output, and applying it twice is a no-op.
//!
//! The pipeline is data-driven: a generic rule table runs first for every
//! profile, then the profile's own ordered table. Adding a profile is a
//! table addition, not a code change.

use regex::Regex;

/// A typography profile: a named, ordered set of text-rewrite rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Hungarian: „low-high” quotes, »guillemets« inner, spaced en dash
    Hu,
    /// German: „low-high“ quotes, ‚low-high‘ inner, spaced en dash
    De,
    /// English: “curly” quotes, ‘curly’ inner, unspaced em dash
    En,
    /// Shunn manuscript format: scene breaks become a centered `#`
    Shunn,
    /// No profile: generic fixes only
    #[default]
    None,
}

impl Profile {
    /// Parse a profile tag. Unrecognized tags map to [`Profile::None`]
    /// rather than failing.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            t if t.eq_ignore_ascii_case("hu") => Profile::Hu,
            t if t.eq_ignore_ascii_case("de") => Profile::De,
            t if t.eq_ignore_ascii_case("en") => Profile::En,
            t if t.eq_ignore_ascii_case("shunn") => Profile::Shunn,
            _ => Profile::None,
        }
    }

    /// The canonical tag for this profile.
    pub fn tag(&self) -> &'static str {
        match self {
            Profile::Hu => "HU",
            Profile::De => "DE",
            Profile::En => "EN",
            Profile::Shunn => "Shunn",
            Profile::None => "None",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Generic rules, applied for every profile before the profile table.
/// Order is significant: dash collapsing must run before the profiles
/// restyle dashes.
const GENERIC_RULES: &[(&str, &str)] = &[
    // Two or more hyphens between word characters: unspaced em dash
    (r"(\w)-{2,}(\w)", "${1}\u{2014}${2}"),
    // Two or more hyphens between whitespace: spaced em dash
    (r"(\s)-{2,}(\s)", "${1}\u{2014}${2}"),
    // Three periods: ellipsis
    (r"\.\.\.", "\u{2026}"),
];

/// Quote and dash rules match only after a literal space; quotes at the
/// very start of a line are left alone, and apostrophes inside words
/// (contractions) never match.
const HU_RULES: &[(&str, &str)] = &[
    (r#" "([^"]*)""#, " \u{201e}${1}\u{201d}"),
    (r" '([^']*)'", " \u{bb}${1}\u{ab}"),
    (" \u{2014} ", " \u{2013} "),
];

const DE_RULES: &[(&str, &str)] = &[
    (r#" "([^"]*)""#, " \u{201e}${1}\u{201c}"),
    (r" '([^']*)'", " \u{201a}${1}\u{2018}"),
    (" \u{2014} ", " \u{2013} "),
];

const EN_RULES: &[(&str, &str)] = &[
    (r#" "([^"]*)""#, " \u{201c}${1}\u{201d}"),
    (r" '([^']*)'", " \u{2018}${1}\u{2019}"),
    (" \u{2013} ", "\u{2014}"),
];

/// Lines consisting solely of `***` or `---` become a centered scene
/// break marker. Quote and dash restyling is not applied under Shunn.
/// A `---` line flanked by whitespace has already been collapsed to an
/// em dash by the generic rules, so a dash-only line counts too.
const SHUNN_RULES: &[(&str, &str)] = &[
    (r"(?m)^\s*\*\*\*\s*$", " # "),
    (r"(?m)^\s*---\s*$", " # "),
    ("(?m)^[ \t]*\u{2014}[ \t]*$", " # "),
];

/// A single compiled rewrite rule.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

/// Typography normalizer for one profile.
///
/// Compiles its rule table once; reusable across any number of texts.
pub struct Normalizer {
    rules: Vec<Rule>,
}

impl Normalizer {
    /// Create a normalizer for the given profile.
    pub fn new(profile: Profile) -> Self {
        let profile_rules: &[(&str, &str)] = match profile {
            Profile::Hu => HU_RULES,
            Profile::De => DE_RULES,
            Profile::En => EN_RULES,
            Profile::Shunn => SHUNN_RULES,
            Profile::None => &[],
        };

        let rules = GENERIC_RULES
            .iter()
            .chain(profile_rules)
            .map(|&(pattern, replacement)| Rule {
                pattern: Regex::new(pattern).unwrap(),
                replacement,
            })
            .collect();

        Self { rules }
    }

    /// Normalize text through the rule pipeline.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in &self.rules {
            // Capture-group rules consume their context, so adjacent
            // matches can shadow each other within one pass; repeat until
            // stable. No replacement reintroduces characters its rule
            // matches, so this terminates.
            loop {
                let rewritten = rule
                    .pattern
                    .replace_all(&result, rule.replacement)
                    .into_owned();
                if rewritten == result {
                    break;
                }
                result = rewritten;
            }
        }
        result
    }
}

/// Normalize text under the given profile.
///
/// Pure function; an unknown profile degrades to the generic rules
/// rather than failing.
///
/// # Example
///
/// ```
/// use manuform::typo::{normalize, Profile};
///
/// let fixed = normalize("He said -- wait...", Profile::None);
/// assert_eq!(fixed, "He said — wait…");
/// ```
pub fn normalize(text: &str, profile: Profile) -> String {
    Normalizer::new(profile).apply(text)
}
