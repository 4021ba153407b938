use thesaurus_core::text::{capitalize_first, rejoin};
use thesaurus_core::{Example, Onym, SenseLike, Tag};

use crate::palette::Palette;

/// Definitions joined with `"; "` and capitalized. Falls back to the
/// cross-references when a sense only points at another word, and to an
/// empty string when there is neither.
pub fn definition_line<S: SenseLike + ?Sized>(sense: &S) -> String {
    if sense.has_definition() {
        capitalize_first(&sense.definitions().join("; "))
    } else if sense.has_cross_references() {
        cross_references(sense)
    } else {
        String::new()
    }
}

/// `[marker; marker]`, using the reference texts when no markers were sent
pub fn cross_references<S: SenseLike + ?Sized>(sense: &S) -> String {
    let markers = if sense.cross_reference_markers().is_empty() {
        sense
            .cross_references()
            .iter()
            .map(|reference| reference.text.as_str())
            .collect::<Vec<_>>()
    } else {
        sense
            .cross_reference_markers()
            .iter()
            .map(String::as_str)
            .collect()
    };
    format!("[{}]", markers.join("; "))
}

/// Display texts joined with `", "`, the first one emphasized.
/// Blank entries are skipped; nothing left means an empty line.
pub fn onym_line(onyms: &[Onym], palette: Palette) -> String {
    let mut texts = onyms
        .iter()
        .map(|onym| onym.text.as_str())
        .filter(|text| !text.is_empty());

    let Some(first) = texts.next() else {
        return String::new();
    };

    let mut parts = vec![palette.emphasis(first)];
    parts.extend(texts.map(str::to_string));
    parts.join(", ")
}

pub fn synonyms<S: SenseLike + ?Sized>(sense: &S, palette: Palette) -> String {
    onym_line(sense.synonyms(), palette)
}

pub fn antonyms<S: SenseLike + ?Sized>(sense: &S, palette: Palette) -> String {
    onym_line(sense.antonyms(), palette)
}

/// Tags joined with `", "` plus a trailing space so the list can prefix a
/// synonym line. Empty when the sense has no tags left after `exclude`.
pub fn tag_list<S: SenseLike + ?Sized>(sense: &S, exclude: &[&str], palette: Palette) -> String {
    let tags = sense.tags(exclude);
    if tags.is_empty() {
        return String::new();
    }
    palette.tags(&format!("{} ", tags.join(", ")))
}

fn backtick_list(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let texts: Vec<String> = tags.iter().map(Tag::display).collect();
    format!("`{}`", texts.join("`, `"))
}

/// `` `Informal` 'text' ``, the register prefix only when present
pub fn example(example: &Example) -> String {
    let registers = backtick_list(&example.registers);
    if registers.is_empty() {
        format!("'{}'", example.text)
    } else {
        format!("{} '{}'", registers, example.text)
    }
}

/// One rendered example per line, each line terminated
pub fn examples<S: SenseLike + ?Sized>(sense: &S) -> String {
    sense
        .examples()
        .iter()
        .map(|ex| format!("{}\n", example(ex)))
        .collect()
}

/// All examples on a single line, separated by `", "`
pub fn joined_examples<S: SenseLike + ?Sized>(sense: &S) -> String {
    rejoin(&examples(sense), "\n", ", ")
}
