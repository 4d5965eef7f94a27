// Syllable counting used as a gate by the vocative rules.

const VOWELS: &[char] = &['a', 'ā', 'e', 'ē', 'i', 'ī', 'o', 'u', 'ū'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Number of maximal vowel runs in `stem`.
pub fn syllables(stem: &str) -> usize {
    let mut count = 0;
    let mut in_vowel = false;
    for c in stem.chars() {
        let vowel = is_vowel(c);
        if vowel && !in_vowel {
            count += 1;
        }
        in_vowel = vowel;
    }
    count
}
