//! Syllable guessing for words without a dictionary entry

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Count vowel groups, discounting a silent final `e`.
///
/// Never returns less than 1.
pub fn guess_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    let mut count = 0;
    let mut in_group = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            count += 1;
        }
        in_group = vowel;
    }

    // "lime", "make": final e is silent; "table", "agree": it is not
    if let [.., before, penult, 'e'] = letters.as_slice() {
        let syllabic_le = *penult == 'l' && !is_vowel(*before);
        if count > 1 && !is_vowel(*penult) && !syllabic_le {
            count -= 1;
        }
    }

    count.max(1)
}
