//! Candidate filter: the "no word containing or contained in a board word" rule

use crate::ports::SimilarityOracle;

/// Suffixes stripped by [`stem`], longest first within each family.
const SUFFIXES: [&str; 10] = ["ings", "ing", "ers", "er", "ed", "es", "re", "s", "e", "y"];

/// Shortest stem [`stem`] will leave behind.
const MIN_STEM: usize = 3;

fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip one inflectional suffix, keeping at least three letters.
///
/// Coarse on purpose: it only needs to map `gaming`/`game` and
/// `centre`/`center` onto the same stem, never to produce real lemmas.
pub fn stem(word: &str) -> &str {
    for suffix in SUFFIXES {
        if let Some(base) = word.strip_suffix(suffix) {
            if base.chars().count() >= MIN_STEM {
                return base;
            }
        }
    }
    word
}

fn contains_either(word: &str, candidate: &str) -> bool {
    candidate.contains(word) || word.contains(candidate)
}

fn conflicts(word: &str, candidate: &str) -> bool {
    word == candidate
        || contains_either(word, candidate)
        || contains_either(&word.replace(' ', ""), &candidate.replace(' ', ""))
        || stem(word) == stem(candidate)
}

/// Whether `candidate` may be given as a clue on a board holding `board_words`.
///
/// Rejects equality, substring containment in either direction, and shared
/// stems. Comparison is case-insensitive and treats `_`/`-` as spaces.
/// Multi-word entries are also compared with the spaces removed, so
/// `icecream` clashes with `ICE CREAM`.
pub fn is_clue_allowed<S: AsRef<str>>(board_words: &[S], candidate: &str) -> bool {
    let candidate = normalize(candidate);
    if candidate.is_empty() {
        return false;
    }
    board_words
        .iter()
        .all(|word| !conflicts(&normalize(word.as_ref()), &candidate))
}

/// Clue filter bound to one board, optionally consulting the oracle's form relation.
pub struct ClueFilter<'a> {
    words: Vec<String>,
    forms: Option<&'a dyn SimilarityOracle>,
}

impl<'a> ClueFilter<'a> {
    pub fn new<I, S>(board_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: board_words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .collect(),
            forms: None,
        }
    }

    /// Also reject candidates the oracle reports as a form of a board word.
    pub fn with_forms(mut self, oracle: &'a dyn SimilarityOracle) -> Self {
        self.forms = Some(oracle);
        self
    }

    pub fn allows(&self, candidate: &str) -> bool {
        let normalized = normalize(candidate);
        if normalized.is_empty() {
            return false;
        }
        self.words.iter().all(|word| {
            !conflicts(word, &normalized)
                && !self.forms.is_some_and(|oracle| {
                    oracle.is_form_of(&word.replace(' ', "_"), &normalized.replace(' ', "_"))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem() {
        assert_eq!(stem("gaming"), "gam");
        assert_eq!(stem("game"), "gam");
        assert_eq!(stem("center"), "cent");
        assert_eq!(stem("centre"), "cent");
        assert_eq!(stem("bed"), "bed");
        assert_eq!(stem("pyramid"), "pyramid");
    }

    #[test]
    fn test_equal_and_substring_rejected() {
        let board = ["ARM", "AIR", "ICE CREAM"];
        assert!(!is_clue_allowed(&board, "arm"));
        assert!(!is_clue_allowed(&board, "forearm"));
        assert!(!is_clue_allowed(&board, "airways"));
        assert!(!is_clue_allowed(&board, "ice"));
        assert!(!is_clue_allowed(&board, "ice_cream"));
        assert!(is_clue_allowed(&board, "dessert"));
    }

    #[test]
    fn test_spacing_of_compounds_ignored() {
        assert!(!is_clue_allowed(&["ICE CREAM"], "icecream"));
        assert!(!is_clue_allowed(&["SNOWMAN"], "snow_man"));
        assert!(!ClueFilter::new(["ICE CREAM"]).allows("icecreams"));
        assert!(is_clue_allowed(&["ICE CREAM"], "sorbet"));
    }

    #[test]
    fn test_empty_candidate_rejected() {
        assert!(!is_clue_allowed(&["ARM"], "  "));
    }

    #[test]
    fn test_form_relation_from_oracle() {
        use crate::adapters::InMemoryOracle;

        let oracle = InMemoryOracle::new().with_form("mouse", "mice");
        let filter = ClueFilter::new(["MOUSE"]).with_forms(&oracle);
        assert!(!filter.allows("mice"));
        assert!(filter.allows("cheese"));
        assert!(ClueFilter::new(["MOUSE"]).allows("mice"));
    }
}
