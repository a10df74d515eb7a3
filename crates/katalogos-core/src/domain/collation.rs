//! Greek-aware string ordering for sibling lists.
//!
//! The upstream generator claims its sibling lists are "alphabetical at all
//! levels". For Greek text, naive codepoint comparison gets this wrong in
//! exactly two ways: accented vowels sort outside the alphabet (ά is U+03AC,
//! before α at U+03B1), and final sigma (ς) sorts before σ. Folding case,
//! stripping the tonos/dialytika marks, and folding ς to σ is sufficient —
//! the lowercase Greek block is otherwise already in alphabetical order.
//!
//! This is the entire locale knowledge the ordering advisory needs; a full
//! ICU collator would be overkill for a fixed, known dataset.

use std::cmp::Ordering;

/// Compare two names under the folded ordering.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

/// Build the folded form of a name, mainly useful in tests and diagnostics.
pub fn sort_key(s: &str) -> String {
    s.chars().map(fold).collect()
}

/// Fold one character: lowercase, strip Greek accent marks, fold final sigma.
fn fold(c: char) -> char {
    match c {
        'ά' | 'Ά' => 'α',
        'έ' | 'Έ' => 'ε',
        'ή' | 'Ή' => 'η',
        'ί' | 'Ί' | 'ϊ' | 'Ϊ' | 'ΐ' => 'ι',
        'ό' | 'Ό' => 'ο',
        'ύ' | 'Ύ' | 'ϋ' | 'Ϋ' | 'ΰ' => 'υ',
        'ώ' | 'Ώ' => 'ω',
        'ς' => 'σ',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}
