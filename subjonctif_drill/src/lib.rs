// Subjonctif drill engine.
//
// Generates fill-in-the-blank French sentences that drill the choice
// between subjunctive and infinitive in the subordinate clause, and
// grades typed answers. The governing rule: when the two clauses share
// a subject, French uses "de" + infinitive; when the subjects differ,
// "que" + subjunctive.
//
// Architecture, data-first:
// - `text.rs`: accent stripping, vowel-sound detection, whitespace collapse
// - `subject.rs`: the fixed subject and main-clause verb tables
// - `conjugation.rs`: dataset model and bare-form extraction
// - `lexicon.rs`: the pool of drilled verbs, parsed from a text file
// - `elision.rs`: "que" -> "qu'", "je" -> "j'", "de" -> "d'"
// - `sentence.rs`: round generation (subjects, mood choice, negation)
// - `grader.rs`: answer comparison
// - `session.rs`: `DrillSession` — owns the stores, PRNG, and round
//   lifecycle (`new_round` / `submit_answer`)
// - `error.rs`: the `DrillError` taxonomy
//
// Default data ships in `data/` and is embedded via `include_str!`;
// callers may point a session at their own files instead. All
// randomness goes through `subjonctif_prng::DrillRng` (or any
// `RandomSource` in tests), so a seeded session replays exactly.

pub mod conjugation;
pub mod elision;
pub mod error;
pub mod grader;
pub mod lexicon;
pub mod rng;
pub mod sentence;
pub mod session;
pub mod subject;
pub mod text;

// Re-export the surface a consumer needs for a drill loop.
pub use error::DrillError;
pub use grader::GradeResult;
pub use sentence::SentenceDraft;
pub use session::DrillSession;
