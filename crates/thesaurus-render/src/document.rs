//! Walks a decoded [`ResultSet`] and produces the lines printed for a query.

use thesaurus_core::{Entry, HeadwordEntry, LexicalEntry, ResultSet, Sense, SenseLike};
use thesaurus_core::{group_by, homograph_key};

use crate::entry::{category_line, derivative_of, title, variant_forms};
use crate::palette::Palette;
use crate::sense::{antonyms, definition_line, joined_examples, synonyms, tag_list};

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub palette: Palette,
    /// Only render lexical entries of this category
    pub category: Option<String>,
    /// Tags never shown in front of synonym and antonym lines
    pub exclude_tags: Vec<String>,
    /// Print the underlined headword before each result
    pub title: bool,
    /// Phonetic notation shown after each category header, e.g. `IPA`
    pub pronunciation: Option<String>,
}

impl RenderOptions {
    fn excluded(&self) -> Vec<&str> {
        self.exclude_tags.iter().map(String::as_str).collect()
    }
}

pub fn render_result_set(set: &ResultSet, options: &RenderOptions) -> Vec<String> {
    set.results
        .iter()
        .flat_map(|result| render_result(result, options))
        .collect()
}

/// Like [`render_result_set`], with results partitioned by homograph and a
/// `word (n)` heading in front of every group that has a number
pub fn render_grouped_result_set(set: &ResultSet, options: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();

    for (key, members) in group_by(&set.results, homograph_key) {
        if let (Some(number), Some(first)) = (key, members.first()) {
            lines.push(options.palette.heading(&format!("{} ({})", first.word, number)));
            lines.push(String::new());
        }
        for result in members {
            lines.extend(render_result(result, options));
        }
    }

    lines
}

pub fn render_result(result: &HeadwordEntry, options: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();

    if options.title {
        lines.extend(title(result).lines().map(str::to_string));
        lines.push(String::new());
    }

    let lexical_entries = match options.category.as_deref() {
        Some(category) => result.filter_by_category(category),
        None => result.lexical_entries.iter().collect(),
    };

    for lexical in lexical_entries {
        lines.extend(render_lexical_entry(lexical, options));
    }

    lines
}

pub fn render_lexical_entry(lexical: &LexicalEntry, options: &RenderOptions) -> Vec<String> {
    let mut lines = vec![
        category_line(lexical, options.pronunciation.as_deref(), options.palette),
        String::new(),
    ];

    if let Some(derived) = derivative_of(lexical) {
        lines.push(derived);
        lines.push(String::new());
    }

    for entry in &lexical.entries {
        lines.extend(render_entry(entry, options));
    }

    lines
}

pub fn render_entry(entry: &Entry, options: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(variants) = variant_forms(entry) {
        lines.push(variants);
        lines.push(String::new());
    }

    for (i, sense) in entry.senses.iter().enumerate() {
        lines.extend(render_sense(i + 1, sense, options));
    }

    lines
}

/// Numbered block for one sense.
///
/// The heading carries the definition line, or the examples when there is no
/// definition. Subsense synonyms and antonyms are listed under the sense's
/// own sections.
pub fn render_sense(number: usize, sense: &Sense, options: &RenderOptions) -> Vec<String> {
    let palette = options.palette;
    let exclude = options.excluded();
    let mut lines = Vec::new();

    let definition = definition_line(sense);
    let examples = joined_examples(sense);
    let heading = if definition.is_empty() { &examples } else { &definition };

    lines.push(palette.heading(format!("{number}. {heading}").trim_end()));
    if !definition.is_empty() && !examples.is_empty() {
        lines.push(format!("   {examples}"));
    }

    let subsense_synonyms: Vec<String> = sense
        .subsenses
        .iter()
        .filter(|subsense| subsense.has_synonyms())
        .map(|subsense| {
            format!(
                "- {}{}",
                tag_list(subsense, &exclude, palette),
                synonyms(subsense, palette)
            )
        })
        .collect();

    if sense.has_synonyms() || !subsense_synonyms.is_empty() {
        lines.push(String::new());
        lines.push("SYNONYMS".to_string());
        if sense.has_synonyms() {
            lines.push(format!(
                "- {}{}",
                tag_list(sense, &exclude, palette),
                synonyms(sense, palette)
            ));
        }
        lines.extend(subsense_synonyms);
    }

    let subsense_antonyms: Vec<String> = sense
        .subsenses
        .iter()
        .filter(|subsense| subsense.has_antonyms())
        .map(|subsense| {
            format!(
                "- {}{}",
                tag_list(subsense, &exclude, palette),
                antonyms(subsense, palette)
            )
        })
        .collect();

    if sense.has_antonyms() || !subsense_antonyms.is_empty() {
        lines.push(String::new());
        lines.push("ANTONYMS".to_string());
        if sense.has_antonyms() {
            lines.push(format!(
                "- {}{}",
                tag_list(sense, &exclude, palette),
                antonyms(sense, palette)
            ));
        }
        lines.extend(subsense_antonyms);
    }

    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use thesaurus_core::decode_value;

    fn plain() -> RenderOptions {
        RenderOptions {
            palette: Palette::plain(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_document_round_trip() {
        let doc = json!({
            "results": [{
                "word": "test",
                "lexicalEntries": [{
                    "lexicalCategory": { "id": "noun", "text": "noun" },
                    "entries": [{ "senses": [{ "definitions": ["test"] }] }]
                }]
            }]
        });
        let set = decode_value("test", doc).unwrap();
        let lines = render_result_set(&set, &plain());

        assert_eq!(lines, vec!["NOUN", "", "1. Test", ""]);
        assert!(!lines.iter().any(|l| l == "SYNONYMS" || l == "ANTONYMS"));
    }

    fn sense(doc: serde_json::Value) -> Sense {
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn test_subsense_synonyms_without_own_synonyms() {
        let sense = sense(json!({
            "definitions": ["content"],
            "subsenses": [
                { "regions": [{ "id": "british", "text": "British" }], "synonyms": [{ "text": "chuffed" }, { "text": "pleased" }] },
                { "definitions": ["no onyms here"] }
            ]
        }));

        assert_eq!(
            render_sense(1, &sense, &plain()),
            vec!["1. Content", "", "SYNONYMS", "- British chuffed, pleased", ""]
        );
    }

    #[test]
    fn test_subsense_antonyms_listed_under_antonyms() {
        let sense = sense(json!({
            "definitions": ["cheerful"],
            "subsenses": [
                { "synonyms": [{ "text": "merry" }] },
                { "registers": [{ "id": "informal", "text": "informal" }], "antonyms": [{ "text": "glum" }] }
            ]
        }));

        assert_eq!(
            render_sense(3, &sense, &plain()),
            vec![
                "3. Cheerful",
                "",
                "SYNONYMS",
                "- merry",
                "",
                "ANTONYMS",
                "- informal glum",
                "",
            ]
        );
    }

    #[test]
    fn test_own_antonyms_before_subsense_antonyms() {
        let sense = sense(json!({
            "definitions": ["cheerful"],
            "antonyms": [{ "text": "sad" }],
            "subsenses": [
                { "registers": [{ "id": "informal", "text": "informal" }], "antonyms": [{ "text": "glum" }] }
            ]
        }));
        let options = RenderOptions {
            exclude_tags: vec!["informal".to_string()],
            ..plain()
        };

        assert_eq!(
            render_sense(1, &sense, &options),
            vec!["1. Cheerful", "", "ANTONYMS", "- sad", "- glum", ""]
        );
    }

    #[test]
    fn test_pronunciation_and_derivative_lines() {
        let doc = json!({
            "results": [{
                "word": "happiness",
                "lexicalEntries": [{
                    "lexicalCategory": { "id": "noun", "text": "Noun" },
                    "derivativeOf": [{ "id": "happy", "text": "happy" }],
                    "pronunciations": [{ "phoneticNotation": "IPA", "phoneticSpelling": "ˈhapɪnəs" }],
                    "entries": [{ "senses": [{ "definitions": ["the state of being happy"] }] }]
                }]
            }]
        });
        let set = decode_value("happiness", doc).unwrap();
        let options = RenderOptions {
            pronunciation: Some("IPA".to_string()),
            ..plain()
        };

        assert_eq!(
            render_result_set(&set, &options),
            vec![
                "NOUN /ˈhapɪnəs/",
                "",
                "Derived from: 'happy'",
                "",
                "1. The state of being happy",
                "",
            ]
        );
    }

    fn happy() -> ResultSet {
        let doc = json!({
            "results": [{
                "word": "happy",
                "lexicalEntries": [
                    {
                        "lexicalCategory": { "id": "adjective", "text": "Adjective" },
                        "entries": [{
                            "variantForms": [{ "text": "happie" }],
                            "senses": [
                                {
                                    "examples": [{ "text": "a happy smile" }, { "text": "happy days" }],
                                    "synonyms": [
                                        { "text": "cheerful" },
                                        { "text": "merry" }
                                    ],
                                    "antonyms": [{ "text": "sad" }],
                                    "registers": [{ "id": "informal", "text": "informal" }],
                                    "subsenses": [{
                                        "regions": [{ "id": "british", "text": "British" }],
                                        "synonyms": [{ "text": "chuffed" }]
                                    }]
                                },
                                {
                                    "definitions": ["willing to do something"],
                                    "examples": [{ "text": "happy to help" }],
                                    "synonyms": [{ "text": "" }]
                                }
                            ]
                        }]
                    },
                    {
                        "lexicalCategory": { "id": "noun", "text": "Noun" },
                        "entries": [{ "senses": [{ "definitions": ["a happy person"] }] }]
                    }
                ]
            }]
        });
        decode_value("happy", doc).unwrap()
    }

    #[test]
    fn test_full_walk_plain() {
        let lines = render_result_set(&happy(), &plain());

        assert_eq!(
            lines,
            vec![
                "ADJECTIVE",
                "",
                "Alternatively: 'happie'",
                "",
                "1. 'a happy smile', 'happy days'",
                "",
                "SYNONYMS",
                "- informal cheerful, merry",
                "- British chuffed",
                "",
                "ANTONYMS",
                "- informal sad",
                "",
                "2. Willing to do something",
                "   'happy to help'",
                "",
                "NOUN",
                "",
                "1. A happy person",
                "",
            ]
        );
    }

    #[test]
    fn test_category_filter_and_exclusion() {
        let options = RenderOptions {
            category: Some("ADJECTIVE".to_string()),
            exclude_tags: vec!["informal".to_string()],
            ..plain()
        };
        let lines = render_result_set(&happy(), &options);

        assert!(lines.contains(&"- cheerful, merry".to_string()));
        assert!(lines.contains(&"- sad".to_string()));
        assert!(!lines.contains(&"NOUN".to_string()));
    }

    #[test]
    fn test_unknown_category_renders_nothing() {
        let options = RenderOptions {
            category: Some("adverb".to_string()),
            ..plain()
        };
        assert!(render_result_set(&happy(), &options).is_empty());
    }

    #[test]
    fn test_title() {
        let options = RenderOptions {
            title: true,
            ..plain()
        };
        let lines = render_result_set(&happy(), &options);

        assert_eq!(&lines[..3], &["happy", "▬▬▬▬▬", ""]);
    }

    #[test]
    fn test_colored_output_emphasizes_first_synonym() {
        let palette = Palette::new(true);
        let options = RenderOptions {
            palette,
            ..Default::default()
        };
        let lines = render_result_set(&happy(), &options);

        let expected = format!("- {}{}, merry", palette.tags("informal "), palette.emphasis("cheerful"));
        assert!(lines.contains(&expected));
    }

    #[test]
    fn test_grouped_by_homograph() {
        let doc = json!({
            "results": [
                {
                    "word": "bank",
                    "lexicalEntries": [{
                        "lexicalCategory": { "id": "noun", "text": "Noun" },
                        "entries": [{ "homographNumber": "100", "senses": [{ "definitions": ["edge of a river"] }] }]
                    }]
                },
                {
                    "word": "bank",
                    "lexicalEntries": [{
                        "lexicalCategory": { "id": "noun", "text": "Noun" },
                        "entries": [{ "homographNumber": "200", "senses": [{ "definitions": ["a financial institution"] }] }]
                    }]
                },
                {
                    "word": "banks",
                    "lexicalEntries": [{
                        "lexicalCategory": { "id": "noun", "text": "Noun" },
                        "entries": [{ "homographNumber": "000", "senses": [{ "definitions": ["plural of bank"] }] }]
                    }]
                }
            ]
        });
        let set = decode_value("bank", doc).unwrap();
        let lines = render_grouped_result_set(&set, &plain());

        assert_eq!(
            lines,
            vec![
                "bank (1)",
                "",
                "NOUN",
                "",
                "1. Edge of a river",
                "",
                "bank (2)",
                "",
                "NOUN",
                "",
                "1. A financial institution",
                "",
                "NOUN",
                "",
                "1. Plural of bank",
                "",
            ]
        );
    }
}
