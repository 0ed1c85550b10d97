// file: src/text/lemmatizer.rs
// description: WordNet-style noun lemmatization
// reference: WordNet morphy noun rules and exception list

use crate::error::{ClassifierError, Result};
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Suffix substitutions applied to nouns, in WordNet order.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const IRREGULAR: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("appendices", "appendix"),
    ("axes", "axis"),
    ("bacteria", "bacterium"),
    ("caches", "cache"),
    ("children", "child"),
    ("corpora", "corpus"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("curricula", "curriculum"),
    ("diagnoses", "diagnosis"),
    ("feet", "foot"),
    ("foci", "focus"),
    ("formulae", "formula"),
    ("fungi", "fungus"),
    ("geese", "goose"),
    ("genera", "genus"),
    ("halves", "half"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("loci", "locus"),
    ("matrices", "matrix"),
    ("maxima", "maximum"),
    ("men", "man"),
    ("mice", "mouse"),
    ("minima", "minimum"),
    ("movies", "movie"),
    ("niches", "niche"),
    ("nuclei", "nucleus"),
    ("optima", "optimum"),
    ("parentheses", "parenthesis"),
    ("phenomena", "phenomenon"),
    ("quanta", "quantum"),
    ("quizzes", "quiz"),
    ("radii", "radius"),
    ("selves", "self"),
    ("spectra", "spectrum"),
    ("stimuli", "stimulus"),
    ("syntheses", "synthesis"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("vertices", "vertex"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Plural-looking words that are their own lemma.
const INVARIANT: &[&str] = &[
    "atlas", "bias", "canvas", "chaos", "economics", "electronics", "genetics", "lens",
    "linguistics", "mathematics", "news", "robotics", "series", "species", "thermodynamics",
];

lazy_static! {
    static ref IRREGULAR_MAP: HashMap<&'static str, &'static str> =
        IRREGULAR.iter().copied().collect();
    static ref INVARIANT_SET: HashSet<&'static str> = INVARIANT.iter().copied().collect();
}

/// Noun lemmatizer.
///
/// With a lexicon, candidates produced by the suffix rules are accepted only if
/// the lexicon knows them and the shortest known candidate wins. Without one,
/// a fixed rule order picks the most plausible singular form.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    lexicon: Option<HashSet<String>>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self { lexicon: None }
    }

    pub fn with_lexicon(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            lexicon: Some(words.into_iter().collect()),
        }
    }

    /// Load a newline-separated word list.
    pub fn from_lexicon_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ClassifierError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let words: Vec<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        debug!("Loaded lemma lexicon with {} entries", words.len());
        Ok(Self::with_lexicon(words))
    }

    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_MAP.get(word) {
            return (*lemma).to_string();
        }

        match &self.lexicon {
            Some(lexicon) => Self::lemmatize_with_lexicon(word, lexicon),
            None => Self::lemmatize_heuristic(word),
        }
    }

    fn lemmatize_with_lexicon(word: &str, lexicon: &HashSet<String>) -> String {
        let mut candidates = vec![word.to_string()];
        for (suffix, replacement) in NOUN_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                candidates.push(format!("{}{}", stem, replacement));
            }
        }

        candidates
            .into_iter()
            .filter(|candidate| !candidate.is_empty() && lexicon.contains(candidate))
            .min_by_key(|candidate| candidate.len())
            .unwrap_or_else(|| word.to_string())
    }

    fn lemmatize_heuristic(word: &str) -> String {
        if word.len() <= 3 || INVARIANT_SET.contains(word) || !word.ends_with('s') {
            return word.to_string();
        }

        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies")
            && stem.len() >= 2
        {
            return format!("{}y", stem);
        }

        for suffix in ["sses", "ches", "shes", "xes"] {
            if word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }

        word[..word.len() - 1].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("networks"), "network");
        assert_eq!(lemmatizer.lemmatize("studies"), "study");
        assert_eq!(lemmatizer.lemmatize("processes"), "process");
        assert_eq!(lemmatizer.lemmatize("approaches"), "approach");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("images"), "image");
        assert_eq!(lemmatizer.lemmatize("curves"), "curve");
    }

    #[test]
    fn test_words_left_alone() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("analysis"), "analysis");
        assert_eq!(lemmatizer.lemmatize("class"), "class");
        assert_eq!(lemmatizer.lemmatize("status"), "status");
        assert_eq!(lemmatizer.lemmatize("gas"), "gas");
        assert_eq!(lemmatizer.lemmatize("mathematics"), "mathematics");
        assert_eq!(lemmatizer.lemmatize("learning"), "learning");
    }

    #[test]
    fn test_irregular_nouns() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("matrices"), "matrix");
        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("hypotheses"), "hypothesis");
    }

    #[test]
    fn test_lexicon_prefers_shortest_known_form() {
        let lemmatizer = Lemmatizer::with_lexicon(
            ["glass", "glasses", "case", "physic", "physics"]
                .iter()
                .map(|w| w.to_string()),
        );

        assert_eq!(lemmatizer.lemmatize("glasses"), "glass");
        assert_eq!(lemmatizer.lemmatize("cases"), "case");
        assert_eq!(lemmatizer.lemmatize("physics"), "physic");
        assert_eq!(lemmatizer.lemmatize("unknowns"), "unknowns");
    }
}
