//! Entity grouping — folds the flat span list from the tagger into one entry
//! per label.
//!
//! Labels in [`SINGLETON_LABELS`] hold a single string and the last span wins.
//! Every other label collects its spans, in order, into a list.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::ner_client::TaggedSpan;

/// Labels that describe one fact about the candidate. A resume has one name
/// and one phone number; skills and employers repeat.
pub const SINGLETON_LABELS: &[&str] = &[
    "Name",
    "Email Address",
    "Phone",
    "Location",
    "Degree",
    "Graduation Year",
    "Years of Experience",
];

pub fn is_singleton(label: &str) -> bool {
    SINGLETON_LABELS.contains(&label)
}

/// Value stored under a label: a bare string for singleton labels, a list otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

pub type ParsedResult = BTreeMap<String, FieldValue>;

pub fn normalize_spans(spans: &[TaggedSpan]) -> ParsedResult {
    let mut parsed = ParsedResult::new();

    for span in spans {
        let text = span.text.trim().to_string();
        debug!(
            label = %span.label,
            score = span.rounded_confidence(),
            "grouping span"
        );

        if is_singleton(&span.label) {
            if let Some(FieldValue::Single(previous)) =
                parsed.insert(span.label.clone(), FieldValue::Single(text))
            {
                // Repeated singleton labels keep only the latest span.
                debug!(label = %span.label, %previous, "overwriting singleton field");
            }
        } else if let FieldValue::Many(values) = parsed
            .entry(span.label.clone())
            .or_insert_with(|| FieldValue::Many(Vec::new()))
        {
            values.push(text);
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(label: &str, text: &str, score: f64) -> TaggedSpan {
        TaggedSpan::new(label, text, score)
    }

    fn many(values: &[&str]) -> FieldValue {
        FieldValue::Many(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_groups_singleton_and_repeatable_labels() {
        let parsed = normalize_spans(&[
            span("Name", " Jane Doe ", 0.98),
            span("Skill", "Python", 0.9),
            span("Skill", "SQL", 0.85),
        ]);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["Name"], FieldValue::Single("Jane Doe".to_string()));
        assert_eq!(parsed["Skill"], many(&["Python", "SQL"]));
    }

    #[test]
    fn test_singleton_last_write_wins() {
        let parsed = normalize_spans(&[span("Name", "A", 0.5), span("Name", "B", 0.6)]);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["Name"], FieldValue::Single("B".to_string()));
    }

    #[test]
    fn test_last_write_wins_ignores_confidence() {
        let parsed = normalize_spans(&[
            span("Phone", "555-0100", 0.99),
            span("Skill", "Go", 0.7),
            span("Phone", " 555-0199", 0.12),
        ]);
        assert_eq!(parsed["Phone"], FieldValue::Single("555-0199".to_string()));
    }

    #[test]
    fn test_repeatable_keeps_duplicates_in_order() {
        let parsed = normalize_spans(&[
            span("Companies worked at", "Acme", 0.8),
            span("Skills", "Rust", 0.9),
            span("Companies worked at", " Globex", 0.7),
            span("Companies worked at", "Acme", 0.6),
        ]);
        assert_eq!(parsed["Companies worked at"], many(&["Acme", "Globex", "Acme"]));
        assert_eq!(parsed["Skills"], many(&["Rust"]));
    }

    #[test]
    fn test_every_label_becomes_a_key() {
        let spans = vec![
            span("Email Address", "jane@example.com", 0.99),
            span("Designation", "Engineer", 0.8),
            span("College Name", "MIT", 0.7),
            span("Graduation Year", "2019", 0.9),
            span("Designation", "Lead", 0.6),
        ];
        let parsed = normalize_spans(&spans);
        for s in &spans {
            assert!(parsed.contains_key(&s.label), "missing key {}", s.label);
        }
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_all_singleton_labels_hold_strings() {
        let spans: Vec<_> = SINGLETON_LABELS.iter().map(|l| span(l, " x ", 0.5)).collect();
        let parsed = normalize_spans(&spans);
        for label in SINGLETON_LABELS {
            assert_eq!(parsed[*label], FieldValue::Single("x".to_string()));
        }
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(is_singleton("Name"));
        assert!(!is_singleton("name"));
        let parsed = normalize_spans(&[span("name", "Jane", 0.9)]);
        assert_eq!(parsed["name"], many(&["Jane"]));
    }

    #[test]
    fn test_empty_span_list() {
        assert!(normalize_spans(&[]).is_empty());
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let parsed = normalize_spans(&[
            span("Name", " Jane Doe ", 0.98),
            span("Skill", "Python", 0.9),
            span("Skill", "SQL", 0.85),
        ]);
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            serde_json::json!({"Name": "Jane Doe", "Skill": ["Python", "SQL"]})
        );
    }
}
