use atria_core::models::domain::{CoreDomain, Subdomain};
use atria_core::models::response::{Choice, StatementKey};
use atria_instruments::catalog::{Catalog, Item};
use atria_instruments::error::InstrumentError;
use atria_instruments::instruments::strength360::{QUESTION_COUNT, builtin_catalog};

fn item(id: u16, a: Subdomain, b: Subdomain) -> Item {
    Item {
        id,
        statement_a: format!("statement {id}A"),
        statement_b: format!("statement {id}B"),
        theme_a: a,
        theme_b: b,
    }
}

#[test]
fn builtin_theme_map_is_total() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.question_count(), QUESTION_COUNT);
    assert_eq!(catalog.statement_count(), 154);

    for question in 1..=QUESTION_COUNT as u16 {
        for choice in Choice::ALL {
            assert!(
                catalog.subdomain_for_answer(question, choice).is_some(),
                "{question}{choice} has no theme"
            );
        }
    }
}

#[test]
fn builtin_catalog_uses_every_subdomain() {
    let catalog = builtin_catalog();
    for subdomain in Subdomain::ALL {
        let used = catalog
            .items()
            .iter()
            .any(|item| item.theme_a == subdomain || item.theme_b == subdomain);
        assert!(used, "{subdomain:?} never appears in the theme map");
    }
}

#[test]
fn lookup_matches_reference_table() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.subdomain_for_answer(1, Choice::A), Some(Subdomain::Achiever));
    assert_eq!(catalog.subdomain_for_answer(1, Choice::B), Some(Subdomain::Command));
    assert_eq!(
        catalog.subdomain_for_key(&"34B".parse::<StatementKey>().unwrap()),
        Some(Subdomain::Achiever)
    );
    assert_eq!(catalog.subdomain_for_answer(54, Choice::A), Some(Subdomain::Achiever));
    assert_eq!(catalog.subdomain_for_answer(54, Choice::B), Some(Subdomain::Achiever));
    assert_eq!(catalog.subdomain_for_answer(77, Choice::B), Some(Subdomain::Relator));
    assert_eq!(
        catalog.domain_for_answer(19, Choice::B),
        Some(CoreDomain::StrategicThinking)
    );
}

#[test]
fn lookup_outside_range_is_absent() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.subdomain_for_answer(0, Choice::A), None);
    assert_eq!(catalog.subdomain_for_answer(78, Choice::A), None);
    assert_eq!(catalog.subdomain_for_answer(999, Choice::B), None);
    assert_eq!(catalog.domain_for_answer(999, Choice::B), None);
}

#[test]
fn partition_lookup_is_total() {
    let catalog = builtin_catalog();
    for subdomain in Subdomain::ALL {
        let domain = catalog.domain_for_subdomain(subdomain);
        assert!(CoreDomain::ALL.contains(&domain));
    }
}

#[test]
fn statement_counts_cover_all_statements() {
    let counts = builtin_catalog().statement_counts();
    assert_eq!(counts.executing, 42);
    assert_eq!(counts.influencing, 35);
    assert_eq!(counts.relationship_building, 39);
    assert_eq!(counts.strategic_thinking, 38);
    assert_eq!(counts.total(), 154);
}

#[test]
fn items_are_indexed_by_id_regardless_of_input_order() {
    let catalog = Catalog::new(vec![
        item(2, Subdomain::Woo, Subdomain::Input),
        item(1, Subdomain::Focus, Subdomain::Empathy),
    ])
    .unwrap();

    assert_eq!(catalog.item(1).map(|i| i.theme_a), Some(Subdomain::Focus));
    assert_eq!(catalog.subdomain_for_answer(2, Choice::B), Some(Subdomain::Input));
}

#[test]
fn empty_catalog_is_rejected() {
    assert!(matches!(
        Catalog::new(Vec::new()),
        Err(InstrumentError::InvalidCatalog(_))
    ));
}

#[test]
fn gaps_and_duplicates_are_rejected() {
    let gap = Catalog::new(vec![
        item(1, Subdomain::Woo, Subdomain::Input),
        item(3, Subdomain::Woo, Subdomain::Input),
    ]);
    assert!(matches!(gap, Err(InstrumentError::MissingQuestion(2))));

    let duplicate = Catalog::new(vec![
        item(1, Subdomain::Woo, Subdomain::Input),
        item(1, Subdomain::Focus, Subdomain::Input),
    ]);
    assert!(matches!(duplicate, Err(InstrumentError::DuplicateQuestion(1))));

    let zero = Catalog::new(vec![item(0, Subdomain::Woo, Subdomain::Input)]);
    assert!(matches!(zero, Err(InstrumentError::InvalidCatalog(_))));
}

#[test]
fn blank_statement_is_rejected() {
    let mut blank = item(1, Subdomain::Woo, Subdomain::Input);
    blank.statement_b = "  ".to_string();
    assert!(matches!(
        Catalog::new(vec![blank]),
        Err(InstrumentError::InvalidCatalog(_))
    ));
}

#[test]
fn json_catalog_loads_names_and_labels() {
    let json = r#"{
        "items": [
            {"id": 1, "statementA": "I finish things.", "statementB": "I speak up.",
             "themeA": "Achiever", "themeB": "Self-Assurance"},
            {"id": 2, "statementA": "I read a lot.", "statementB": "I include people.",
             "themeA": "Input", "themeB": "Includer"}
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();

    assert_eq!(catalog.question_count(), 2);
    assert_eq!(
        catalog.subdomain_for_answer(1, Choice::B),
        Some(Subdomain::SelfAssurance)
    );
    assert_eq!(catalog.item(2).unwrap().statement(Choice::A), "I read a lot.");
}

#[test]
fn json_catalog_with_unknown_theme_is_rejected() {
    let json = r#"{"items": [
        {"id": 1, "statementA": "a", "statementB": "b", "themeA": "Charisma", "themeB": "Woo"}
    ]}"#;
    let err = Catalog::from_json(json).unwrap_err();
    assert!(matches!(err, InstrumentError::Core(_)));
    assert_eq!(err.to_string(), "unknown subdomain: Charisma");
}

#[test]
fn exported_catalog_loads_back() {
    let json = builtin_catalog().to_json_pretty().unwrap();
    let reloaded = Catalog::from_json(&json).unwrap();
    assert_eq!(&reloaded, builtin_catalog());
}
