// Sentence generation: the grammatical heart of the drill.
//
// Each round builds a main clause ("elle veut ", "j'ai peur ") and asks
// the learner to complete the subordinate part with a verb from the
// lexicon. The mood of the answer hinges on one comparison: if the
// subordinate subject is the *same* as the main subject, French uses an
// infinitive introduced by "de"; if it differs, the clause takes "que"
// and the subjunctive.
//
// The subject comparison is by display string, not person slot: "il"
// and "on" conjugate identically but name different referents, so an
// "il ... on" pairing still takes the subjunctive. Only an exact
// pronoun repeat collapses to the infinitive.

use crate::conjugation::{ConjugationTable, Mood};
use crate::elision::attach_with_elision;
use crate::error::DrillError;
use crate::lexicon::VerbLexicon;
use crate::rng::RandomSource;
use crate::subject::{MAIN_CLAUSES, SUBJECTS};
use crate::text::{collapse_whitespace, starts_with_vowel_sound};

/// One quiz round: the sentence opening, the verb to place in the blank,
/// whether the answer must be negated, and the single correct
/// completion. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceDraft {
    /// Everything before the blank, elision already applied.
    pub opening: String,
    /// The lexicon phrase the learner must conjugate.
    pub asked_verb: String,
    /// The exact expected completion, whitespace-collapsed.
    pub expected: String,
    /// Whether the completion must carry "ne ... pas" / "ne pas".
    pub negated: bool,
}

/// Generate a fresh drill round.
///
/// Draw order: main subject, main verb, negation flip, subordinate
/// subject, asked verb. Resolution errors (unknown lemma, missing form)
/// propagate; no partial sentence is ever returned.
pub fn generate(
    table: &ConjugationTable,
    lexicon: &VerbLexicon,
    rng: &mut dyn RandomSource,
) -> Result<SentenceDraft, DrillError> {
    let subject1 = SUBJECTS[rng.pick(SUBJECTS.len())];
    let main_verb = MAIN_CLAUSES[rng.pick(MAIN_CLAUSES.len())];
    let main_form = table.resolve(main_verb, subject1, Mood::Indicative)?;

    let mut opening = attach_with_elision(subject1.display, starts_with_vowel_sound(&main_form));
    opening.push_str(&main_form);
    opening.push(' ');

    let negated = rng.coin();
    let subject2 = SUBJECTS[rng.pick(SUBJECTS.len())];
    let asked_verb = lexicon.sample(rng).to_string();

    let expected = if subject2.display == subject1.display {
        // Same subject in both clauses: infinitive introduced by "de".
        let form = table.resolve(&asked_verb, subject2, Mood::Infinitive)?;
        opening.push_str(&attach_with_elision(
            "de",
            starts_with_vowel_sound(&form) && !negated,
        ));
        if negated {
            format!("ne pas {form}")
        } else {
            form
        }
    } else {
        // Different subject: "que" + subjunctive.
        if starts_with_vowel_sound(subject2.display) {
            opening.push_str(" qu'");
        } else {
            opening.push_str(" que ");
        }
        let form = table.resolve(&asked_verb, subject2, Mood::Subjunctive)?;
        opening.push_str(&attach_with_elision(
            subject2.display,
            starts_with_vowel_sound(&form) && !negated,
        ));
        if negated {
            let ne = attach_with_elision("ne", starts_with_vowel_sound(&form));
            format!("{ne}{form} pas")
        } else {
            form
        }
    };

    Ok(SentenceDraft {
        opening,
        asked_verb,
        expected: collapse_whitespace(&expected),
        negated,
    })
}
