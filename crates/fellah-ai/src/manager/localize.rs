//! Reply localization: ordered term substitution plus greeting template.
//!
//! Substitutions are plain substring replacements applied one rule at a
//! time, in configured order. They are not word-boundary aware, so a rule
//! for `water` also rewrites `watermelon`, and a later rule may rewrite
//! text produced by an earlier one.

/// Default greeting placed before every localized reply.
pub const DEFAULT_GREETING: &str = "📡 Marhaba, hada l-jawab dyalk:\n\n";

/// Built-in English to Darija farming vocabulary, in application order.
const DARIJA_TERMS: &[(&str, &str)] = &[
    ("crop", "zra3a"),
    ("farm", "mzra3a"),
    ("water", "l-ma"),
    ("soil", "trab"),
    ("harvest", "l-hassad"),
    ("fertilizer", "l-khmad"),
    ("irrigation", "s-saqaya"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationTable {
    terms: Vec<(String, String)>,
    greeting: String,
    suffix: String,
}

impl LocalizationTable {
    /// Build a table from ordered (source, target) pairs.
    ///
    /// Empty source terms are skipped.
    pub fn new<S, T>(terms: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(|(s, t)| (s.into(), t.into()))
            .filter(|(s, _)| !s.is_empty())
            .collect();
        Self {
            terms,
            greeting: DEFAULT_GREETING.to_string(),
            suffix: String::new(),
        }
    }

    /// The built-in Darija vocabulary.
    pub fn darija() -> Self {
        Self::new(DARIJA_TERMS.iter().copied())
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    /// Apply every substitution in order, without the greeting template.
    pub fn substitute(&self, text: &str) -> String {
        self.terms
            .iter()
            .fold(text.to_string(), |acc, (source, target)| {
                acc.replace(source.as_str(), target)
            })
    }

    /// Substitute, then wrap in the greeting template.
    pub fn localize(&self, text: &str) -> String {
        format!("{}{}{}", self.greeting, self.substitute(text), self.suffix)
    }
}

impl Default for LocalizationTable {
    fn default() -> Self {
        Self::darija()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localizes_water_and_crop() {
        let table = LocalizationTable::new([("water", "l-ma"), ("crop", "zra3a")]);
        let out = table.localize("I need water for my crop");
        assert!(out.contains("l-ma"));
        assert!(out.contains("zra3a"));
        assert_eq!(
            out,
            "📡 Marhaba, hada l-jawab dyalk:\n\nI need l-ma for my zra3a"
        );
    }

    #[test]
    fn later_rule_rewrites_earlier_output() {
        let table = LocalizationTable::new([("crop", "farm"), ("farm", "mzra3a")]);
        assert_eq!(table.substitute("my crop"), "my mzra3a");

        let reversed = LocalizationTable::new([("farm", "mzra3a"), ("crop", "farm")]);
        assert_eq!(reversed.substitute("my crop"), "my farm");
    }

    #[test]
    fn substring_matches_inside_words() {
        let table = LocalizationTable::darija();
        assert_eq!(table.substitute("watermelon"), "l-mamelon");
        assert_eq!(table.substitute("farmer"), "mzra3aer");
    }

    #[test]
    fn darija_table_order() {
        let table = LocalizationTable::darija();
        let sources: Vec<_> = table.terms().map(|(s, _)| s).collect();
        assert_eq!(
            sources,
            ["crop", "farm", "water", "soil", "harvest", "fertilizer", "irrigation"]
        );
    }

    #[test]
    fn deterministic() {
        let table = LocalizationTable::darija();
        let text = "Improve soil before harvest; use irrigation and fertilizer on the farm.";
        assert_eq!(table.localize(text), table.localize(text));
        assert_eq!(
            table.substitute(text),
            "Improve trab before l-hassad; use s-saqaya and l-khmad on the mzra3a."
        );
    }

    #[test]
    fn replacements_are_case_sensitive() {
        let table = LocalizationTable::darija();
        assert_eq!(table.substitute("Water"), "Water");
    }

    #[test]
    fn empty_sources_are_skipped() {
        let table = LocalizationTable::new([("", "x"), ("soil", "trab")]);
        assert_eq!(table.terms().count(), 1);
        assert_eq!(table.substitute("ab"), "ab");
    }

    #[test]
    fn custom_greeting_and_suffix() {
        let table = LocalizationTable::new(Vec::<(String, String)>::new())
            .with_greeting("> ")
            .with_suffix(" <");
        assert_eq!(table.localize("hi"), "> hi <");
    }
}
