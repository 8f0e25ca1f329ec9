use std::collections::BTreeSet;

use serde_json::Value;
use ui::{Formatter, Labels, SourceState};

/// Label set completeness test.
/// Every bundled label document under `ui/labels/` must define exactly the
/// keys of the built-in set, so a typo never silently falls back to Russian.
///
/// If you add a label set:
/// 1. Create `ui/labels/<locale>.json` with every key from `ru-RU.json`
/// 2. Register it in `BUNDLED` below
const RU_RU: &str = include_str!("../labels/ru-RU.json");
const EN_US: &str = include_str!("../labels/en-US.json");

const BUNDLED: &[(&str, &str)] = &[("ru-RU", RU_RU), ("en-US", EN_US)];

fn keys(src: &str) -> BTreeSet<String> {
    let value: Value = serde_json::from_str(src).expect("label document is valid JSON");
    value
        .as_object()
        .expect("label document is an object")
        .keys()
        .cloned()
        .collect()
}

fn reference_keys() -> BTreeSet<String> {
    keys(&serde_json::to_string(&Labels::default()).unwrap())
}

#[test]
fn bundled_sets_define_every_key() {
    let expected = reference_keys();
    let mut failures = Vec::new();

    for (locale, src) in BUNDLED {
        let found = keys(src);
        let missing: Vec<_> = expected.difference(&found).cloned().collect();
        let unknown: Vec<_> = found.difference(&expected).cloned().collect();
        if !missing.is_empty() || !unknown.is_empty() {
            failures.push(format!(
                "{locale}: missing [{}], unknown [{}]",
                missing.join(", "),
                unknown.join(", ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!("Label set check failed:\n  {}", failures.join("\n  "));
    }
}

#[test]
fn russian_set_matches_builtin_defaults() {
    assert_eq!(Labels::from_json(RU_RU).unwrap(), Labels::default());
}

#[test]
fn english_set_drives_every_formatter() {
    let fmt = Formatter::new(Labels::from_json(EN_US).unwrap());

    assert_eq!(fmt.format_value(12.34, true), "12.3°");
    assert_eq!(fmt.format_speed(1.0, false), "no data");
    assert_eq!(fmt.formatted_speed(-1.25, SourceState::live(), true), "-1.3°/s");
    assert_eq!(fmt.format_graph_time(2500.0), "3s");
    assert_eq!(fmt.format_study_info(None), "Study not loaded");
    assert_eq!(
        fmt.format_study_info(Some("# Study No. 5 | 2024-01-02 03:04:05 #")),
        "Study No. 5 [2024-01-02 03:04:05]"
    );
    assert_eq!(
        fmt.format_study_info(Some("2024-01-02 03:04:05")),
        "Study [2024-01-02 03:04:05]"
    );
    assert_eq!(fmt.collect_study_header("no header"), "Study information not found");
}

#[test]
fn markers_never_contain_hash() {
    // `#` is stripped before segments are matched.
    for (locale, src) in BUNDLED {
        let labels = Labels::from_json(src).unwrap();
        assert!(
            !labels.study_number_marker.contains('#'),
            "{locale}: study number marker can never match"
        );
    }
}
