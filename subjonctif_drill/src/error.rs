// Drill error taxonomy.
//
// Every failure the engine can surface is a `DrillError` variant, so the
// session caller can distinguish a retryable load failure from a
// lexicon/dataset mismatch without string matching. Loading and lookup
// errors propagate unmodified to the round-generation caller; the engine
// never substitutes a partial or degraded sentence.

use crate::conjugation::Mood;
use crate::subject::Person;
use thiserror::Error;

/// Errors surfaced by data loading, conjugation resolution, and grading.
#[derive(Debug, Error)]
pub enum DrillError {
    /// Reading or parsing a data source failed. Terminal for the current
    /// round; the next round retries the load.
    #[error("failed to load {path}: {reason}")]
    DataLoad { path: String, reason: String },

    /// A lemma the lexicon asked for is absent from the conjugation
    /// dataset — a lexicon/dataset mismatch, never silently defaulted.
    #[error("verb '{0}' is missing from the conjugation dataset")]
    VerbNotFound(String),

    /// A conjugation record exists but lacks the requested person slot.
    #[error("no {mood} {person} form recorded for '{lemma}'")]
    MissingForm {
        lemma: String,
        mood: Mood,
        person: Person,
    },

    /// The parsed verb lexicon has zero entries; no round can be generated.
    #[error("the verb lexicon is empty")]
    EmptyLexicon,

    /// `submit_answer` was called with no round in progress.
    #[error("no active round to grade")]
    NoActiveRound,
}

impl DrillError {
    /// Build a `DataLoad` from any error source and the path it came from.
    pub fn data_load(path: &str, source: impl std::fmt::Display) -> Self {
        DrillError::DataLoad {
            path: path.to_string(),
            reason: source.to_string(),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mood::Infinitive => "infinitive",
            Mood::Subjunctive => "subjunctive present",
            Mood::Indicative => "indicative present",
        })
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
