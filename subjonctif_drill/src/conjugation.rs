// Conjugation dataset and surface-form resolution.
//
// `ConjugationTable` is the loaded dataset: a map from accent-stripped
// lemma to a `VerbEntry` whose present-tense fields hold full clause
// strings exactly as the upstream conjugation data writes them —
// pronoun included ("je parle", "qu'il/elle/on parle"), with
// "/"-separated alternate spellings ("je paie/paye"). `resolve` digs the
// bare verb form out of those strings for a given subject and mood.
//
// The extraction leans on one fragile fact: the written pronoun prefix
// of each clause has a fixed length per person slot. That length table
// (`PRONOUN_PREFIX_LEN`) must match the dataset phrasing exactly or the
// trim corrupts every form, so it is a named constant with golden tests
// per slot rather than numbers buried in the extraction code.

use crate::error::DrillError;
use crate::subject::{Person, Subject};
use crate::text::{collapse_whitespace, strip_accents};
use serde::Deserialize;
use std::collections::HashMap;

/// Which verb form a resolution asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Infinitive,
    Subjunctive,
    Indicative,
}

/// Written length of the subject pronoun baked into each dataset clause,
/// in slot order I/You/HeSheIt/We/YouAll/They:
/// "je ", "tu ", "il/elle/on ", "nous ", "vous ", "ils/elles".
///
/// Elided first persons ("j'ai") are shorter than "je "; the extraction
/// pads them with one leading space first so this table still applies.
pub const PRONOUN_PREFIX_LEN: [usize; 6] = [3, 3, 11, 5, 5, 9];

/// One verb's record in the dataset, under its accent-stripped key.
#[derive(Debug, Clone, Deserialize)]
pub struct VerbEntry {
    pub data: VerbData,
}

/// The payload of a verb record: infinitive surface form plus the two
/// present-tense paradigms.
#[derive(Debug, Clone, Deserialize)]
pub struct VerbData {
    /// Infinitive surface form, accents intact ("être").
    pub word: String,
    pub indicatif: IndicatifMood,
    pub subjonctif: SubjonctifMood,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndicatifMood {
    pub present: IndicatifPresent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubjonctifMood {
    pub present: SubjonctifPresent,
}

/// Indicative present clauses, one per person slot. Slots are optional
/// so a hole in the data surfaces as `MissingForm` at resolve time
/// instead of failing the whole dataset parse.
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatifPresent {
    #[serde(rename = "indicatifPresentI", default)]
    pub first_sg: Option<String>,
    #[serde(rename = "indicatifPresentYou", default)]
    pub second_sg: Option<String>,
    #[serde(rename = "indicatifPresentHeSheIt", default)]
    pub third_sg: Option<String>,
    #[serde(rename = "indicatifPresentWe", default)]
    pub first_pl: Option<String>,
    #[serde(rename = "indicatifPresentYouAll", default)]
    pub second_pl: Option<String>,
    #[serde(rename = "indicatifPresentThey", default)]
    pub third_pl: Option<String>,
}

/// Subjunctive present clauses, one per person slot, each carrying the
/// subordinating "que"/"qu'" the dataset bakes in.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjonctifPresent {
    #[serde(rename = "subjonctifPresentI", default)]
    pub first_sg: Option<String>,
    #[serde(rename = "subjonctifPresentYou", default)]
    pub second_sg: Option<String>,
    #[serde(rename = "subjonctifPresentHeSheIt", default)]
    pub third_sg: Option<String>,
    #[serde(rename = "subjonctifPresentWe", default)]
    pub first_pl: Option<String>,
    #[serde(rename = "subjonctifPresentYouAll", default)]
    pub second_pl: Option<String>,
    #[serde(rename = "subjonctifPresentThey", default)]
    pub third_pl: Option<String>,
}

impl IndicatifPresent {
    fn slot(&self, person: Person) -> Option<&str> {
        match person {
            Person::FirstSg => self.first_sg.as_deref(),
            Person::SecondSg => self.second_sg.as_deref(),
            Person::ThirdSg => self.third_sg.as_deref(),
            Person::FirstPl => self.first_pl.as_deref(),
            Person::SecondPl => self.second_pl.as_deref(),
            Person::ThirdPl => self.third_pl.as_deref(),
        }
    }
}

impl SubjonctifPresent {
    fn slot(&self, person: Person) -> Option<&str> {
        match person {
            Person::FirstSg => self.first_sg.as_deref(),
            Person::SecondSg => self.second_sg.as_deref(),
            Person::ThirdSg => self.third_sg.as_deref(),
            Person::FirstPl => self.first_pl.as_deref(),
            Person::SecondPl => self.second_pl.as_deref(),
            Person::ThirdPl => self.third_pl.as_deref(),
        }
    }
}

/// The loaded conjugation dataset, keyed by accent-stripped lemma.
///
/// Parsed once and retained for the session lifetime; lookups never
/// mutate it.
#[derive(Debug, Clone)]
pub struct ConjugationTable {
    entries: HashMap<String, VerbEntry>,
}

impl ConjugationTable {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<String, VerbEntry> = serde_json::from_str(json)?;
        Ok(ConjugationTable { entries })
    }

    /// Number of verbs in the dataset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a lemma, stripping accents to match the dataset keys.
    ///
    /// An absent lemma is a lexicon/dataset mismatch and fails with
    /// `VerbNotFound`; it must propagate to the round caller.
    pub fn lookup(&self, lemma: &str) -> Result<&VerbEntry, DrillError> {
        let key = strip_accents(lemma);
        self.entries
            .get(&key)
            .ok_or_else(|| DrillError::VerbNotFound(lemma.to_string()))
    }

    /// Resolve the surface form of `verb_phrase` for a subject and mood.
    ///
    /// The phrase is a lemma plus an optional adjectival complement after
    /// the first space ("être content"). The complement is appended to
    /// the resolved form, with an "e" agreement suffix for feminine
    /// subjects. The result is whitespace-collapsed.
    pub fn resolve(
        &self,
        verb_phrase: &str,
        subject: Subject,
        mood: Mood,
    ) -> Result<String, DrillError> {
        let (lemma, complement) = split_phrase(verb_phrase);
        let entry = self.lookup(lemma)?;

        let missing = || DrillError::MissingForm {
            lemma: lemma.to_string(),
            mood,
            person: subject.person,
        };

        let mut form = match mood {
            Mood::Infinitive => entry.data.word.clone(),
            Mood::Subjunctive => {
                let raw = entry
                    .data
                    .subjonctif
                    .present
                    .slot(subject.person)
                    .ok_or_else(missing)?;
                extract_bare_form(&strip_subordinator(raw), subject.person)
            }
            Mood::Indicative => {
                let raw = entry
                    .data
                    .indicatif
                    .present
                    .slot(subject.person)
                    .ok_or_else(missing)?;
                extract_bare_form(raw, subject.person)
            }
        };

        if let Some(adj) = complement {
            form.push(' ');
            form.push_str(adj);
            if subject.feminine {
                form.push('e');
            }
        }

        Ok(collapse_whitespace(&form))
    }
}

/// Split a verb phrase into lemma and optional complement at the first
/// space.
fn split_phrase(verb_phrase: &str) -> (&str, Option<&str>) {
    match verb_phrase.split_once(' ') {
        Some((lemma, complement)) => (lemma, Some(complement)),
        None => (verb_phrase, None),
    }
}

/// Drop the leading subordinating conjunction from a subjunctive clause:
/// four chars for "que ", three for the elided "qu'".
fn strip_subordinator(raw: &str) -> String {
    let skip = if raw.starts_with("que") { 4 } else { 3 };
    raw.chars().skip(skip).collect()
}

/// Strip the written subject pronoun from a clause, leaving the verb.
///
/// Elided pronouns fuse into the verb ("j'ai"); a clause containing an
/// apostrophe gets one leading pad space so the fixed-width trim from
/// `PRONOUN_PREFIX_LEN` still lands on the verb. Alternate spellings
/// after a "/" are cut; the pronoun's own slashes ("il/elle/on") are
/// already gone by then.
fn extract_bare_form(clause: &str, person: Person) -> String {
    let padded = if clause.contains('\'') {
        format!(" {clause}")
    } else {
        clause.to_string()
    };
    let form: String = padded
        .chars()
        .skip(PRONOUN_PREFIX_LEN[person.index()])
        .collect();
    match form.find('/') {
        Some(i) => form[..i].to_string(),
        None => form,
    }
}

/// Load the default dataset embedded at compile time.
///
/// Uses `include_str!` on `data/verbes.json`. Panics if the embedded
/// JSON is malformed (should never happen in a released build).
pub fn default_table() -> ConjugationTable {
    let json = include_str!("../data/verbes.json");
    ConjugationTable::from_json(json).expect("embedded verbes.json is malformed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::SUBJECTS;

    fn subj(display: &str) -> Subject {
        SUBJECTS
            .iter()
            .copied()
            .find(|s| s.display == display)
            .unwrap()
    }

    #[test]
    fn prefix_lengths_match_dataset_pronouns() {
        let pronouns = ["je ", "tu ", "il/elle/on ", "nous ", "vous ", "ils/elles"];
        for (i, p) in pronouns.iter().enumerate() {
            assert_eq!(
                PRONOUN_PREFIX_LEN[i],
                p.chars().count(),
                "slot {i} prefix length diverged from the pronoun {p:?}"
            );
        }
    }

    #[test]
    fn golden_indicative_all_slots() {
        let table = default_table();
        let expected = [
            ("je", "parle"),
            ("tu", "parles"),
            ("il", "parle"),
            ("nous", "parlons"),
            ("vous", "parlez"),
            ("ils", "parlent"),
        ];
        for (display, form) in expected {
            assert_eq!(
                table.resolve("parler", subj(display), Mood::Indicative).unwrap(),
                form,
                "indicative slot for {display}"
            );
        }
    }

    #[test]
    fn golden_subjunctive_all_slots() {
        let table = default_table();
        let expected = [
            ("je", "parle"),
            ("tu", "parles"),
            ("il", "parle"),
            ("nous", "parlions"),
            ("vous", "parliez"),
            ("ils", "parlent"),
        ];
        for (display, form) in expected {
            assert_eq!(
                table.resolve("parler", subj(display), Mood::Subjunctive).unwrap(),
                form,
                "subjunctive slot for {display}"
            );
        }
    }

    #[test]
    fn golden_vowel_initial_all_slots() {
        // "aimer" exercises the elided pronoun path: "j'aime", "que j'aime".
        let table = default_table();
        let expected = [
            ("je", "aime", "aime"),
            ("tu", "aimes", "aimes"),
            ("elle", "aime", "aime"),
            ("nous", "aimons", "aimions"),
            ("vous", "aimez", "aimiez"),
            ("elles", "aiment", "aiment"),
        ];
        for (display, ind, sub) in expected {
            assert_eq!(
                table.resolve("aimer", subj(display), Mood::Indicative).unwrap(),
                ind
            );
            assert_eq!(
                table.resolve("aimer", subj(display), Mood::Subjunctive).unwrap(),
                sub
            );
        }
    }

    #[test]
    fn irregular_forms_and_accents_survive() {
        let table = default_table();
        assert_eq!(
            table.resolve("être", subj("vous"), Mood::Indicative).unwrap(),
            "êtes"
        );
        assert_eq!(
            table.resolve("avoir", subj("je"), Mood::Indicative).unwrap(),
            "ai"
        );
        assert_eq!(
            table.resolve("avoir", subj("ils"), Mood::Indicative).unwrap(),
            "ont"
        );
        assert_eq!(
            table.resolve("être", subj("on"), Mood::Subjunctive).unwrap(),
            "soit"
        );
        assert_eq!(
            table
                .resolve("préférer", subj("il"), Mood::Indicative)
                .unwrap(),
            "préfère"
        );
    }

    #[test]
    fn infinitive_reads_word_field() {
        let table = default_table();
        assert_eq!(
            table.resolve("être", subj("je"), Mood::Infinitive).unwrap(),
            "être"
        );
        assert_eq!(
            table.resolve("écrire", subj("tu"), Mood::Infinitive).unwrap(),
            "écrire"
        );
    }

    #[test]
    fn alternate_spellings_truncate_at_slash() {
        let table = default_table();
        assert_eq!(
            table.resolve("pouvoir", subj("je"), Mood::Indicative).unwrap(),
            "peux"
        );
        assert_eq!(
            table.resolve("payer", subj("ils"), Mood::Indicative).unwrap(),
            "paient"
        );
        assert_eq!(
            table.resolve("payer", subj("tu"), Mood::Subjunctive).unwrap(),
            "paies"
        );
    }

    #[test]
    fn complement_appended_with_feminine_agreement() {
        let table = default_table();
        assert_eq!(
            table
                .resolve("être content", subj("il"), Mood::Indicative)
                .unwrap(),
            "est content"
        );
        assert_eq!(
            table
                .resolve("être content", subj("elle"), Mood::Indicative)
                .unwrap(),
            "est contente"
        );
        assert_eq!(
            table
                .resolve("avoir peur", subj("je"), Mood::Indicative)
                .unwrap(),
            "ai peur"
        );
    }

    #[test]
    fn lookup_strips_accents_from_the_query() {
        let table = default_table();
        assert!(table.lookup("être").is_ok());
        assert!(table.lookup("etre").is_ok());
        assert!(table.lookup("écrire").is_ok());
    }

    #[test]
    fn unknown_lemma_is_verb_not_found() {
        let table = default_table();
        let err = table
            .resolve("zigzaguer", subj("je"), Mood::Indicative)
            .unwrap_err();
        assert!(matches!(err, DrillError::VerbNotFound(l) if l == "zigzaguer"));
    }

    #[test]
    fn missing_person_slot_is_missing_form() {
        let json = r#"{
            "falloir": {
                "data": {
                    "word": "falloir",
                    "indicatif": {"present": {"indicatifPresentHeSheIt": "il/elle/on faut"}},
                    "subjonctif": {"present": {"subjonctifPresentHeSheIt": "qu'il/elle/on faille"}}
                }
            }
        }"#;
        let table = ConjugationTable::from_json(json).unwrap();
        assert_eq!(
            table.resolve("falloir", subj("il"), Mood::Indicative).unwrap(),
            "faut"
        );
        let err = table
            .resolve("falloir", subj("nous"), Mood::Subjunctive)
            .unwrap_err();
        assert!(matches!(
            err,
            DrillError::MissingForm { lemma, mood: Mood::Subjunctive, person: Person::FirstPl }
                if lemma == "falloir"
        ));
    }

    #[test]
    fn default_table_covers_every_main_clause_lemma() {
        let table = default_table();
        for phrase in crate::subject::MAIN_CLAUSES {
            let (lemma, _) = split_phrase(phrase);
            assert!(
                table.lookup(lemma).is_ok(),
                "main clause lemma {lemma:?} missing from embedded dataset"
            );
        }
    }
}
