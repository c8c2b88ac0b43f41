use atria_core::error::CoreError;
use atria_core::models::response::{Choice, Response, Responses, StatementKey, parse_question_id};

#[test]
fn statement_key_round_trips_through_display() {
    let key: StatementKey = "34B".parse().unwrap();
    assert_eq!(key, StatementKey::new(34, Choice::B));
    assert_eq!(key.to_string(), "34B");
}

#[test]
fn statement_key_rejects_malformed_input() {
    for raw in ["", "A", "34", "34C", "034A", "+3A", "3 A", "-1B", "99999A"] {
        assert!(
            matches!(raw.parse::<StatementKey>(), Err(CoreError::InvalidStatementKey(_))),
            "{raw} should not parse"
        );
    }
}

#[test]
fn question_ids_must_be_canonical() {
    assert_eq!(parse_question_id("7"), Some(7));
    assert_eq!(parse_question_id("0"), Some(0));
    assert_eq!(parse_question_id("07"), None);
    assert_eq!(parse_question_id(" 7"), None);
}

#[test]
fn choice_is_case_sensitive() {
    assert_eq!("A".parse::<Choice>().unwrap(), Choice::A);
    assert!(matches!("a".parse::<Choice>(), Err(CoreError::InvalidChoice(_))));
}

#[test]
fn client_payload_deserializes() {
    let json = r#"{
        "1": {"selectedStatement": "A"},
        "2": {"selectedStatement": "B"},
        "3": {},
        "4": {"selectedStatement": ""},
        "abc": {"selectedStatement": "A"}
    }"#;
    let responses = Responses::from_json(json).unwrap();

    assert_eq!(responses.len(), 5);
    assert_eq!(responses.answered_count(), 3);

    let parsed: Vec<Response> = responses.iter_parsed().collect();
    assert_eq!(
        parsed,
        vec![
            Response { question_id: 1, choice: Choice::A },
            Response { question_id: 2, choice: Choice::B },
        ]
    );
}

#[test]
fn insert_replaces_previous_answer() {
    let mut responses = Responses::new();
    responses.insert(5, Choice::A);
    responses.insert(5, Choice::B);

    assert_eq!(responses.len(), 1);
    assert_eq!(responses.get("5").and_then(|r| r.selection()), Some("B"));
}

#[test]
fn serializes_in_client_shape() {
    let responses: Responses = [(12, Choice::B)].into_iter().collect();
    let json = serde_json::to_string(&responses).unwrap();
    assert_eq!(json, r#"{"12":{"selectedStatement":"B"}}"#);
}

#[test]
fn garbled_entries_read_as_unanswered() {
    let json = r#"{
        "1": {"selectedStatement": "A"},
        "2": null,
        "3": "A",
        "4": {"selectedStatement": 5},
        "5": [1, 2],
        "6": {"selectedStatement": "B", "extra": true}
    }"#;
    let responses = Responses::from_json(json).unwrap();

    assert_eq!(responses.len(), 6);
    assert_eq!(responses.answered_count(), 2);
    assert_eq!(responses.get("2").and_then(|r| r.selection()), None);
    assert_eq!(responses.get("4").and_then(|r| r.selection()), None);

    let parsed: Vec<Response> = responses.iter_parsed().collect();
    assert_eq!(
        parsed,
        vec![
            Response { question_id: 1, choice: Choice::A },
            Response { question_id: 6, choice: Choice::B },
        ]
    );
}

#[test]
fn non_object_payload_is_still_an_error() {
    assert!(matches!(
        Responses::from_json("[1, 2, 3]"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn entries_pair_raw_selection_with_parsed_form() {
    let mut responses = Responses::new();
    responses.insert(3, Choice::B);
    responses.insert_raw("4", "C");

    let entries: Vec<_> = responses.entries().collect();
    assert_eq!(
        entries,
        vec![
            ("3", "B", Some(Response { question_id: 3, choice: Choice::B })),
            ("4", "C", None),
        ]
    );
}
