// Elision: attaching a word to whatever follows it.
//
// French drops the final vowel of short words before a vowel sound and
// marks the contraction with an apostrophe: "que" + "il" -> "qu'il",
// "je" + "aime" -> "j'aime", "de" + "attendre" -> "d'attendre". The same
// rule attaches subject pronouns, "que", "de", and "ne" throughout the
// generator, so it lives in one place.

/// Attach `word` to a following word, eliding if the next word starts
/// with a vowel sound.
///
/// If `word` ends in "e" or "a", is not the literal "elle", and
/// `next_starts_with_vowel` holds, the final vowel is dropped and an
/// apostrophe appended with no trailing space. Otherwise the word gets a
/// single trailing space. "elle" is exempt: "elle aime", never "ell'aime".
pub fn attach_with_elision(word: &str, next_starts_with_vowel: bool) -> String {
    if (word.ends_with('e') || word.ends_with('a')) && word != "elle" && next_starts_with_vowel {
        format!("{}'", &word[..word.len() - 1])
    } else {
        format!("{word} ")
    }
}
