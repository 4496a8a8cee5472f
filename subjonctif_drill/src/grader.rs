// Answer grading.
//
// Grading is an exact string comparison after whitespace normalization:
// leading/trailing whitespace and doubled spaces are forgiven, accents
// and case are not. "etre" for "être" is a wrong answer — accent
// placement is part of what the drill teaches.

use crate::text::collapse_whitespace;

/// The outcome of grading one answer, with both sides as compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub correct: bool,
    pub normalized_answer: String,
    pub normalized_expected: String,
}

/// Compare a typed answer against the expected completion.
pub fn grade(answer: &str, expected: &str) -> GradeResult {
    let normalized_answer = collapse_whitespace(answer);
    let normalized_expected = collapse_whitespace(expected);
    GradeResult {
        correct: normalized_answer == normalized_expected,
        normalized_answer,
        normalized_expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_forgiven() {
        let result = grade(" got it  ", "got it");
        assert!(result.correct);
        assert_eq!(result.normalized_answer, "got it");
        assert_eq!(result.normalized_expected, "got it");

        assert!(grade("ne  pas   parler", "ne pas parler").correct);
    }

    #[test]
    fn accents_are_not() {
        assert!(!grade("etre", "être").correct);
        assert!(!grade("reussisse", "réussisse").correct);
    }

    #[test]
    fn case_is_not() {
        assert!(!grade("Parle", "parle").correct);
    }

    #[test]
    fn apostrophes_must_match() {
        assert!(grade("n'attende pas", "n'attende pas").correct);
        assert!(!grade("ne attende pas", "n'attende pas").correct);
    }
}
