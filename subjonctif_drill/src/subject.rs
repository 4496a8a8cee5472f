// Fixed grammatical tables: subject pronouns and main-clause verbs.
//
// The drill draws from two closed sets. `SUBJECTS` holds the nine French
// subject pronouns with their person-number slot and gender; the slot
// decides which conjugation field is read, gender only affects adjectival
// agreement. `MAIN_CLAUSES` holds the seventeen governing verb phrases
// that call for a subjunctive (or infinitive) in the clause they
// introduce — "vouloir que...", "être content que...", and so on.
//
// Both tables are `const` so a dataset change that breaks their
// assumptions fails a unit test, not a drill round.

/// Grammatical person-number slot, in the dataset's field order:
/// I, You, HeSheIt, We, YouAll, They.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    FirstSg,
    SecondSg,
    ThirdSg,
    FirstPl,
    SecondPl,
    ThirdPl,
}

impl Person {
    /// Position of this slot in the dataset's six-field order.
    pub fn index(self) -> usize {
        match self {
            Person::FirstSg => 0,
            Person::SecondSg => 1,
            Person::ThirdSg => 2,
            Person::FirstPl => 3,
            Person::SecondPl => 4,
            Person::ThirdPl => 5,
        }
    }

    /// English label for error messages ("I", "You", ...), matching the
    /// dataset's field-name suffixes.
    pub fn label(self) -> &'static str {
        match self {
            Person::FirstSg => "I",
            Person::SecondSg => "You",
            Person::ThirdSg => "HeSheIt",
            Person::FirstPl => "We",
            Person::SecondPl => "YouAll",
            Person::ThirdPl => "They",
        }
    }
}

/// A subject pronoun as it appears in a drill sentence.
///
/// `display` is the written form; `person` selects the conjugation slot;
/// `feminine` adds the adjectival agreement suffix and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub display: &'static str,
    pub feminine: bool,
    pub person: Person,
}

/// The nine drill subjects. "il", "on", and "elle" share a slot but are
/// distinct subjects: two clauses headed by "il" and "on" have different
/// referents, so they still take the subjunctive.
pub const SUBJECTS: [Subject; 9] = [
    Subject { display: "je", feminine: false, person: Person::FirstSg },
    Subject { display: "tu", feminine: false, person: Person::SecondSg },
    Subject { display: "il", feminine: false, person: Person::ThirdSg },
    Subject { display: "on", feminine: false, person: Person::ThirdSg },
    Subject { display: "elle", feminine: true, person: Person::ThirdSg },
    Subject { display: "nous", feminine: false, person: Person::FirstPl },
    Subject { display: "vous", feminine: false, person: Person::SecondPl },
    Subject { display: "ils", feminine: false, person: Person::ThirdPl },
    Subject { display: "elles", feminine: true, person: Person::ThirdPl },
];

/// Main-clause verb phrases that govern a subjunctive subordinate clause.
/// Entries with a complement ("être content") keep it after the first
/// space; the complement takes feminine agreement when the subject does.
pub const MAIN_CLAUSES: [&str; 17] = [
    "demander",
    "désirer",
    "exiger",
    "préférer",
    "proposer",
    "recommander",
    "souhaiter",
    "suggérer",
    "vouloir",
    "aimer",
    "avoir peur",
    "être content",
    "être désolé",
    "être étonné",
    "être fâché",
    "être ravi",
    "regretter",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_subjects_with_expected_slots() {
        assert_eq!(SUBJECTS.len(), 9);
        let third_sg: Vec<&str> = SUBJECTS
            .iter()
            .filter(|s| s.person == Person::ThirdSg)
            .map(|s| s.display)
            .collect();
        assert_eq!(third_sg, vec!["il", "on", "elle"]);
        let third_pl: Vec<&str> = SUBJECTS
            .iter()
            .filter(|s| s.person == Person::ThirdPl)
            .map(|s| s.display)
            .collect();
        assert_eq!(third_pl, vec!["ils", "elles"]);
    }

    #[test]
    fn only_elle_and_elles_are_feminine() {
        let feminine: Vec<&str> = SUBJECTS
            .iter()
            .filter(|s| s.feminine)
            .map(|s| s.display)
            .collect();
        assert_eq!(feminine, vec!["elle", "elles"]);
    }

    #[test]
    fn person_indices_are_dataset_order() {
        let all = [
            Person::FirstSg,
            Person::SecondSg,
            Person::ThirdSg,
            Person::FirstPl,
            Person::SecondPl,
            Person::ThirdPl,
        ];
        for (i, p) in all.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
        assert_eq!(Person::ThirdSg.label(), "HeSheIt");
        assert_eq!(Person::SecondPl.label(), "YouAll");
    }

    #[test]
    fn seventeen_main_clauses() {
        assert_eq!(MAIN_CLAUSES.len(), 17);
        // Complemented entries split at the first space.
        assert!(MAIN_CLAUSES.contains(&"être content"));
        assert!(MAIN_CLAUSES.contains(&"avoir peur"));
    }
}
