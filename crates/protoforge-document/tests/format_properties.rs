use protoforge_document::{parse_records, render_records, separate_records, RECORD_START};
use protoforge_model::{Component, Prototype};
use proptest::prelude::*;
use std::path::Path;

fn document_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(format!("{RECORD_START} entity")),
        "  [a-z]{1,6}: [a-z0-9]{0,6}",
        "  - type: [A-Z][a-z]{0,6}",
        "# [a-z ]{0,10}",
    ]
}

proptest! {
    #[test]
    fn prop_separation_idempotent(lines in proptest::collection::vec(document_line(), 0..30)) {
        let text = lines.join("\n");
        let once = separate_records(&text);
        let twice = separate_records(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_separation_only_adds_blank_lines(lines in proptest::collection::vec(document_line(), 0..30)) {
        let text = lines.join("\n");
        let formatted = separate_records(&text);

        let strip = |s: &str| {
            s.lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(strip(&text), strip(&formatted));
        prop_assert!(!formatted.starts_with('\n') || text.starts_with('\n'));
    }

    #[test]
    fn prop_rendered_documents_parse_back(ids in proptest::collection::vec("[A-Z][a-zA-Z]{0,8}", 0..6)) {
        let records: Vec<_> = ids
            .iter()
            .map(|id| {
                Prototype::new()
                    .with_id(id.clone())
                    .with_component(Component::new("Sprite"))
                    .to_yaml_value()
            })
            .collect();

        let text = render_records(&records).unwrap();
        let parsed = parse_records(Path::new("doc.yml"), &text).unwrap();
        prop_assert_eq!(parsed, records);
    }
}
