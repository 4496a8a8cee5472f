// Surface-text helpers: accent stripping, vowel-sound detection, and
// whitespace collapsing.
//
// These are the small pure functions the rest of the engine leans on.
// `strip_accents` backs both dataset keying (lemmas are stored
// accent-stripped) and the phonetic vowel check; `collapse_whitespace`
// is the final normalization applied to every completion and to graded
// answers.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Remove diacritics: NFD-decompose and drop combining marks.
///
/// "être" -> "etre", "préféré" -> "prefere". Pure and total; leaves
/// non-accented characters (including apostrophes and slashes) alone.
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Phonetic check: does this word begin with a vowel sound?
///
/// Trims, strips accents, then tests for a leading a/e/i/o/u or the
/// sequence "ha" (mute h, as in "habiter"). The comparison is against
/// lowercase literals, matching how the drill data is written. Governs
/// elision ("que" -> "qu'") and pronoun contraction ("je" -> "j'").
pub fn starts_with_vowel_sound(s: &str) -> bool {
    let s = strip_accents(s.trim());
    s.starts_with('a')
        || s.starts_with('e')
        || s.starts_with('i')
        || s.starts_with('o')
        || s.starts_with('u')
        || s.starts_with("ha")
}

/// Trim and collapse every run of two-or-more spaces into one.
///
/// Idempotent: applying it twice gives the same string as applying it
/// once. The output never carries leading/trailing whitespace or a
/// double space.
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = s.trim().to_string();
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out
}
