// Drill session: the consumer-facing surface.
//
// `DrillSession` owns the two data stores and a PRNG, and exposes the
// round lifecycle: `new_round` produces a `SentenceDraft`, and
// `submit_answer` grades the typed completion against it. The stores
// start uninitialized and are populated on the first round, then
// retained for the session lifetime; a load failure leaves the store
// empty so the next round retries. The engine is single-threaded and
// synchronous, so the memo itself is the whole single-flight story —
// there is no in-flight state to coalesce.

use crate::conjugation::ConjugationTable;
use crate::error::DrillError;
use crate::grader::{GradeResult, grade};
use crate::lexicon::VerbLexicon;
use crate::sentence::{SentenceDraft, generate};
use std::path::PathBuf;
use subjonctif_prng::DrillRng;

const EMBEDDED_CONJUGATIONS: &str = include_str!("../data/verbes.json");
const EMBEDDED_LEXICON: &str = include_str!("../data/verbes.txt");

/// Where a data store loads from: the files shipped in the crate, or a
/// caller-supplied path.
#[derive(Debug, Clone)]
enum DataSource {
    Embedded,
    Path(PathBuf),
}

impl DataSource {
    fn describe(&self) -> String {
        match self {
            DataSource::Embedded => "<embedded>".to_string(),
            DataSource::Path(p) => p.display().to_string(),
        }
    }

    fn read(&self, embedded: &'static str) -> Result<String, DrillError> {
        match self {
            DataSource::Embedded => Ok(embedded.to_string()),
            DataSource::Path(p) => std::fs::read_to_string(p)
                .map_err(|e| DrillError::data_load(&p.display().to_string(), e)),
        }
    }
}

/// A drill session: data stores, PRNG, and the round in progress.
pub struct DrillSession {
    rng: DrillRng,
    conjugation_source: DataSource,
    lexicon_source: DataSource,
    conjugations: Option<ConjugationTable>,
    lexicon: Option<VerbLexicon>,
    current: Option<SentenceDraft>,
    rounds_started: u64,
}

impl DrillSession {
    /// Session over the embedded data files, seeded for reproducibility.
    pub fn new(seed: u64) -> Self {
        DrillSession {
            rng: DrillRng::new(seed),
            conjugation_source: DataSource::Embedded,
            lexicon_source: DataSource::Embedded,
            conjugations: None,
            lexicon: None,
            current: None,
            rounds_started: 0,
        }
    }

    /// Session loading one or both data files from disk instead of the
    /// embedded defaults.
    pub fn with_sources(
        seed: u64,
        lexicon_path: Option<PathBuf>,
        conjugations_path: Option<PathBuf>,
    ) -> Self {
        let mut session = Self::new(seed);
        if let Some(p) = lexicon_path {
            session.lexicon_source = DataSource::Path(p);
        }
        if let Some(p) = conjugations_path {
            session.conjugation_source = DataSource::Path(p);
        }
        session
    }

    /// Rounds started so far. Increments only when a round generates
    /// successfully, so a caller can tell retries from progress.
    pub fn rounds_started(&self) -> u64 {
        self.rounds_started
    }

    /// The round awaiting an answer, if any.
    pub fn current_draft(&self) -> Option<&SentenceDraft> {
        self.current.as_ref()
    }

    /// Generate a fresh round, loading the data stores on first use.
    ///
    /// Any prior ungraded round is discarded. On failure no draft is
    /// left behind: the caller sees the error, never a partial sentence,
    /// and the next call retries whatever failed.
    pub fn new_round(&mut self) -> Result<&SentenceDraft, DrillError> {
        self.current = None;

        if self.conjugations.is_none() {
            let text = self
                .conjugation_source
                .read(EMBEDDED_CONJUGATIONS)?;
            let table = ConjugationTable::from_json(&text)
                .map_err(|e| DrillError::data_load(&self.conjugation_source.describe(), e))?;
            self.conjugations = Some(table);
        }
        if self.lexicon.is_none() {
            let text = self.lexicon_source.read(EMBEDDED_LEXICON)?;
            self.lexicon = Some(VerbLexicon::parse(&text)?);
        }

        let draft = match (&self.conjugations, &self.lexicon) {
            (Some(table), Some(lexicon)) => generate(table, lexicon, &mut self.rng)?,
            // Both memos were populated above.
            _ => unreachable!(),
        };

        self.rounds_started += 1;
        Ok(self.current.insert(draft))
    }

    /// Grade an answer against the current round and consume it.
    ///
    /// Fails with `NoActiveRound` if no round is in progress; a second
    /// submit without a new round is also an error.
    pub fn submit_answer(&mut self, answer: &str) -> Result<GradeResult, DrillError> {
        let draft = self.current.take().ok_or(DrillError::NoActiveRound)?;
        Ok(grade(answer, &draft.expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_then_correct_answer() {
        let mut session = DrillSession::new(42);
        let expected = session.new_round().unwrap().expected.clone();
        let result = session.submit_answer(&expected).unwrap();
        assert!(result.correct);
    }

    #[test]
    fn wrong_answer_reports_both_sides() {
        let mut session = DrillSession::new(42);
        let expected = session.new_round().unwrap().expected.clone();
        let result = session.submit_answer("n'importe quoi").unwrap();
        assert!(!result.correct);
        assert_eq!(result.normalized_expected, expected);
        assert_eq!(result.normalized_answer, "n'importe quoi");
    }

    #[test]
    fn submit_without_round_fails() {
        let mut session = DrillSession::new(1);
        assert!(matches!(
            session.submit_answer("parler"),
            Err(DrillError::NoActiveRound)
        ));
    }

    #[test]
    fn submit_consumes_the_round() {
        let mut session = DrillSession::new(1);
        let expected = session.new_round().unwrap().expected.clone();
        session.submit_answer(&expected).unwrap();
        assert!(matches!(
            session.submit_answer(&expected),
            Err(DrillError::NoActiveRound)
        ));
    }

    #[test]
    fn same_seed_replays_the_same_session() {
        let mut a = DrillSession::new(7);
        let mut b = DrillSession::new(7);
        for _ in 0..20 {
            assert_eq!(a.new_round().unwrap(), b.new_round().unwrap());
        }
    }

    #[test]
    fn data_loads_once_and_sticks() {
        let mut session = DrillSession::new(3);
        session.new_round().unwrap();
        assert!(session.conjugations.is_some());
        assert!(session.lexicon.is_some());
        for _ in 0..5 {
            session.new_round().unwrap();
        }
        assert_eq!(session.rounds_started(), 6);
    }

    #[test]
    fn missing_lexicon_file_is_data_load() {
        let mut session = DrillSession::with_sources(
            1,
            Some(PathBuf::from("/nonexistent/verbes.txt")),
            None,
        );
        let err = session.new_round().unwrap_err();
        assert!(matches!(err, DrillError::DataLoad { .. }), "got {err:?}");
        assert!(session.current_draft().is_none());
    }

    #[test]
    fn failed_round_leaves_no_draft() {
        let mut session = DrillSession::with_sources(
            1,
            None,
            Some(PathBuf::from("/nonexistent/verbes.json")),
        );
        assert!(session.new_round().is_err());
        assert!(matches!(
            session.submit_answer("parler"),
            Err(DrillError::NoActiveRound)
        ));
        assert_eq!(session.rounds_started(), 0);
    }
}
