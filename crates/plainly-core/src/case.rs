//! Case-preserving substitution.
//!
//! Every rewrite stage (phrase swaps, contractions, tone) replaces matched
//! text through [`apply_case_like`], so "HOWEVER" becomes "BUT" and
//! "However" becomes "But" from a single lower-case rule.

use regex::{Captures, Regex, RegexBuilder};

/// Re-case `replacement` to follow the casing pattern of `exemplar`.
///
/// - all upper-case exemplar: upper-case the whole replacement
/// - title case (first char upper, rest lower): upper-case only the first
///   char of the replacement
/// - all lower-case exemplar: lower-case the whole replacement
/// - anything else: the replacement as given
///
/// Works on chars, never bytes, so multi-byte letters are safe.
pub fn apply_case_like(exemplar: &str, replacement: &str) -> String {
    let Some(first) = exemplar.chars().next() else {
        return replacement.to_string();
    };

    if exemplar == exemplar.to_uppercase() {
        return replacement.to_uppercase();
    }

    let rest = &exemplar[first.len_utf8()..];
    let first_is_upper = first.to_uppercase().eq(std::iter::once(first));
    if first_is_upper && rest == rest.to_lowercase() {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(r) => r.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }

    if exemplar == exemplar.to_lowercase() {
        return replacement.to_lowercase();
    }

    replacement.to_string()
}

/// What a matched span is rewritten to, before re-casing.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// A fixed string.
    Literal(&'static str),
    /// A string built from the match's capture groups.
    Derived(fn(&Captures<'_>) -> String),
}

impl std::fmt::Debug for Replacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// A case-insensitive pattern and its case-preserving replacement.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pattern: Regex,
    replacement: Replacement,
}

impl SubstitutionRule {
    /// Compile a rule. The pattern is always matched case-insensitively.
    pub fn new(pattern: &str, replacement: Replacement) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            pattern,
            replacement,
        })
    }

    /// Compile a rule with a fixed replacement.
    pub fn literal(pattern: &str, replacement: &'static str) -> Result<Self, regex::Error> {
        Self::new(pattern, Replacement::Literal(replacement))
    }

    /// The compiled pattern.
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Replace every match in `text`, re-casing each replacement to match.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                let raw = match self.replacement {
                    Replacement::Literal(s) => s.to_string(),
                    Replacement::Derived(f) => f(caps),
                };
                apply_case_like(&caps[0], &raw)
            })
            .into_owned()
    }
}

/// Run an ordered rule table. Each rule sees the output of the one before.
pub fn apply_rules(text: &str, rules: &[SubstitutionRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_caps_exemplar() {
        assert_eq!(apply_case_like("HOWEVER", "but"), "BUT");
    }

    #[test]
    fn title_case_exemplar() {
        assert_eq!(apply_case_like("However", "but"), "But");
        assert_eq!(apply_case_like("It is worth noting that", "notably, x"), "Notably, x");
    }

    #[test]
    fn title_case_keeps_replacement_tail() {
        assert_eq!(apply_case_like("Utilize", "use the API"), "Use the API");
    }

    #[test]
    fn lower_case_exemplar() {
        assert_eq!(apply_case_like("however", "But"), "but");
    }

    #[test]
    fn mixed_case_exemplar_keeps_replacement() {
        assert_eq!(apply_case_like("hoWever", "But"), "But");
    }

    #[test]
    fn empty_exemplar_and_replacement() {
        assert_eq!(apply_case_like("", "kept"), "kept");
        assert_eq!(apply_case_like("Perhaps", ""), "");
    }

    #[test]
    fn single_capital_is_all_caps() {
        assert_eq!(apply_case_like("I am", "I'm"), "I'm");
        assert_eq!(apply_case_like("i am", "I'm"), "i'm");
    }

    #[test]
    fn multibyte_first_char() {
        assert_eq!(apply_case_like("Éte", "ça"), "Ça");
        assert_eq!(apply_case_like("ÉTÉ", "ça"), "ÇA");
    }

    #[test]
    fn rule_preserves_case_per_match() {
        let rule = SubstitutionRule::literal(r"\butilize\b", "use").unwrap();
        assert_eq!(
            rule.apply("Utilize it. UTILIZE it. utilize it."),
            "Use it. USE it. use it."
        );
    }

    #[test]
    fn derived_rule_uses_captures() {
        let rule = SubstitutionRule::new(
            r"\bwith regard to\s+([^,.!?;:]+)",
            Replacement::Derived(|caps| format!("regarding {}", &caps[1])),
        )
        .unwrap();
        assert_eq!(rule.apply("with regard to the plan, go"), "regarding the plan, go");
    }

    #[test]
    fn rules_apply_in_order() {
        let rules = vec![
            SubstitutionRule::literal(r"\bfoo\b", "bar").unwrap(),
            SubstitutionRule::literal(r"\bbar\b", "baz").unwrap(),
        ];
        assert_eq!(apply_rules("foo", &rules), "baz");
    }
}
