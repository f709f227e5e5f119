//! Heuristic English syllable estimation.
//!
//! Counts vowel groups, then applies two corrections in a fixed order:
//!
//! 1. silent trailing `e` (`"cake"` → 1): when the word ends in `e` preceded
//!    by a consonant and more than one group was counted, drop one;
//! 2. consonant + `le` ending (`"simple"` → 2): when rule 1 dropped the
//!    final `e` of a consonant-`le`/`les` ending, that `le` is a syllable of
//!    its own, so add one back.
//!
//! The result is never less than 1.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Number of maximal runs of vowels in `chars`.
fn vowel_groups(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut prev_was_vowel = false;

    for &c in chars {
        let vowel = is_vowel(c);
        if vowel && !prev_was_vowel {
            groups += 1;
        }
        prev_was_vowel = vowel;
    }

    groups
}

/// True when `chars` ends in consonant + `le`, or consonant + `les`.
fn ends_in_consonant_le(chars: &[char]) -> bool {
    let stem = match chars {
        [rest @ .., 'l', 'e', 's'] => rest,
        [rest @ .., 'l', 'e'] => rest,
        _ => return false,
    };
    matches!(stem.last(), Some(&c) if !is_vowel(c))
}

/// Estimate the syllable count of a single word. Case-insensitive.
pub fn estimate(word: &str) -> usize {
    let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    let mut count = vowel_groups(&chars);

    let mut dropped_silent_e = false;
    if let [.., before, 'e'] = chars.as_slice() {
        if !is_vowel(*before) && count > 1 {
            count -= 1;
            dropped_silent_e = true;
        }
    }

    if dropped_silent_e && ends_in_consonant_le(&chars) {
        count += 1;
    }

    count.max(1)
}
