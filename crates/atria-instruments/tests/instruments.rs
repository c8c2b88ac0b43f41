use atria_core::models::domain::CoreDomain;
use atria_core::models::response::{Choice, Responses};
use atria_instruments::instruments::custom::CustomInstrument;
use atria_instruments::{Instrument, all_instruments, get_instrument};

const TWO_ITEM_FORM: &str = r#"{
    "items": [
        {"id": 1, "statementA": "I plan ahead.", "statementB": "I cheer people on.",
         "themeA": "Strategic", "themeB": "Positivity"},
        {"id": 2, "statementA": "I keep promises.", "statementB": "I start quickly.",
         "themeA": "Responsibility", "themeB": "Activator"}
    ]
}"#;

#[test]
fn registry_lists_strength360() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["strength360".to_string()]);

    let instrument = get_instrument("strength360").expect("built-in instrument");
    assert_eq!(instrument.name(), "Strength 360");
    assert_eq!(instrument.catalog().question_count(), 77);
    assert!(get_instrument("beyonders").is_none());
}

#[test]
fn instrument_scores_through_its_catalog() {
    let instrument = get_instrument("strength360").unwrap();
    let responses: Responses = (1..=77).map(|q| (q, Choice::A)).collect();

    let scores = instrument.score(&responses);
    assert_eq!(scores.core.executing, 37);

    let report = instrument.report(&responses, 2);
    assert_eq!(report.primary_domain, CoreDomain::Executing);
    assert!(report.breakdown.iter().all(|b| b.top_subdomains.len() == 2));
}

#[test]
fn structured_input_summarizes_scores() {
    let instrument = get_instrument("strength360").unwrap();
    let responses = Responses::from_choices([(1, Choice::A), (2, Choice::B), (8, Choice::B)]);
    let text = instrument.to_structured_input(&instrument.score(&responses));

    assert!(text.starts_with("## Strength 360\n"));
    assert!(text.contains("Primary talent domain: Influencing"));
    assert!(text.contains("Statements scored: 3"));
    assert!(text.contains("### Executing (1, 33%)\nPeople who execute make things happen.\n"));
    assert!(text.contains("- Achiever: 1 (100%)"));
    assert!(text.contains("- Self-Assurance: 1 (50%)"));
    assert!(text.contains("### Strategic Thinking (0, 0%)"));
    assert!(!text.contains("Relator"));
}

#[test]
fn custom_instrument_uses_its_own_table() {
    let instrument = CustomInstrument::from_json("pilot", "Pilot Form", TWO_ITEM_FORM).unwrap();
    assert_eq!(instrument.id(), "pilot");

    let responses = Responses::from_choices([(1, Choice::A), (2, Choice::B), (3, Choice::A)]);
    let scores = instrument.score(&responses);

    assert_eq!(scores.core.strategic_thinking, 1);
    assert_eq!(scores.core.influencing, 1);
    assert_eq!(scores.total(), 2);
}

#[test]
fn custom_instrument_rejects_bad_json() {
    assert!(CustomInstrument::from_json("x", "X", "{\"items\": 3}").is_err());
}
