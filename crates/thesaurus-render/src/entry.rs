use thesaurus_core::{Entry, HeadwordEntry, LexicalEntry};

use crate::palette::Palette;

pub fn category_header(lexical: &LexicalEntry, palette: Palette) -> String {
    palette.category(&lexical.category_label())
}

/// `{category} /spelling/` when `notation` is set and the entry has a
/// spelling in it
pub fn category_line(lexical: &LexicalEntry, notation: Option<&str>, palette: Palette) -> String {
    let header = category_header(lexical, palette);
    match notation.and_then(|notation| lexical.pronunciation(notation)) {
        Some(spelling) => format!("{header} /{spelling}/"),
        None => header,
    }
}

/// `Derived from: 'w1', 'w2'`, or `None` for words that are not derivatives
pub fn derivative_of(lexical: &LexicalEntry) -> Option<String> {
    if !lexical.is_derivative() {
        return None;
    }
    let words: Vec<String> = lexical
        .derivative_of
        .iter()
        .filter(|d| !d.text.is_empty())
        .map(|d| format!("'{}'", d.text))
        .collect();
    Some(format!("Derived from: {}", words.join(", ")))
}

/// `Alternatively: 'v1', 'v2'`, or `None` when the entry has no variants
pub fn variant_forms(entry: &Entry) -> Option<String> {
    if !entry.has_variant_forms() {
        return None;
    }
    let variants: Vec<String> = entry
        .variant_forms
        .iter()
        .filter(|variant| !variant.text.is_empty())
        .map(|variant| format!("'{}'", variant.text))
        .collect();
    Some(format!("Alternatively: {}", variants.join(", ")))
}

/// Headword underlined with one `▬` per character
pub fn title(result: &HeadwordEntry) -> String {
    let underline = "▬".repeat(result.word.chars().count());
    format!("{}\n{}", result.word, underline)
}
