//! Small text helpers for display labels.

/// Build a count-prefixed label, pluralizing the unit word.
///
/// `pluralize("Color", 1)` is `"1 Color"`; any other count pluralizes,
/// including zero: `"0 Colors"`.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}", count, plural_form(word))
    }
}

fn plural_form(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        // "Category" -> "Categories", but "Day" -> "Days"
        if !stem.is_empty() && !ends_with_vowel(stem) {
            return format!("{}ies", stem);
        }
    }
    if word.ends_with('s') || word.ends_with('x') || word.ends_with("sh") || word.ends_with("ch") {
        return format!("{}es", word);
    }
    format!("{}s", word)
}

fn ends_with_vowel(s: &str) -> bool {
    matches!(
        s.chars().last(),
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
    )
}
