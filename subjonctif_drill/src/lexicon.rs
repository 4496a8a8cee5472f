// Verb lexicon: the pool of subordinate-clause verbs to drill.
//
// The lexicon file is plain text, one verb phrase per line, optionally
// followed by " –" and a free-text gloss that the parser discards:
//
//     attendre – to wait
//     être – to be
//
// Parsed once per session and sampled uniformly for each round.

use crate::error::DrillError;
use crate::rng::RandomSource;

/// The parsed pool of candidate verbs, in file order.
#[derive(Debug, Clone)]
pub struct VerbLexicon {
    phrases: Vec<String>,
}

impl VerbLexicon {
    /// Parse a lexicon from its text form.
    ///
    /// Each line is cut at the first " –" (space + en-dash), trimmed,
    /// and kept if non-empty. Blank and gloss-only lines are skipped.
    /// Fails with `EmptyLexicon` if nothing survives.
    pub fn parse(text: &str) -> Result<Self, DrillError> {
        let phrases: Vec<String> = text
            .lines()
            .map(|line| {
                let head = match line.find(" –") {
                    Some(i) => &line[..i],
                    None => line,
                };
                head.trim().to_string()
            })
            .filter(|phrase| !phrase.is_empty())
            .collect();

        if phrases.is_empty() {
            return Err(DrillError::EmptyLexicon);
        }
        Ok(VerbLexicon { phrases })
    }

    /// All phrases, in file order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Draw a uniformly random phrase.
    pub fn sample(&self, rng: &mut dyn RandomSource) -> &str {
        &self.phrases[rng.pick(self.phrases.len())]
    }
}

/// Load the default lexicon embedded at compile time.
///
/// Uses `include_str!` on `data/verbes.txt`. Panics if the embedded
/// file parses to an empty list (should never happen in a released
/// build).
pub fn default_lexicon() -> VerbLexicon {
    let text = include_str!("../data/verbes.txt");
    VerbLexicon::parse(text).expect("embedded verbes.txt is empty")
}
