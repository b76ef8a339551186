//! End-to-end validation of whole databases through the library API.

use crate::support::builders::{section, DatabaseBuilder};
use crate::support::harness::{COMPONENTS, CONFIGURATIONS, SUPPLIERS};
use crate::support::recorder::{Level, Recorder};

use bomcheck::db::Database;
use bomcheck::error::{Entity, ErrorKind};
use bomcheck::validate::{Validator, WarningKind};
use bomcheck::value::{Record, Value};

#[test]
fn test_minimal_database_passes_with_supply_warning() {
    let db = Database::parse(SUPPLIERS, COMPONENTS, CONFIGURATIONS).unwrap();
    let recorder = Recorder::new();

    let report = Validator::new(&db, &recorder).run().unwrap();

    let gaps: Vec<_> = report.warnings_of(WarningKind::SupplyGap).collect();
    assert_eq!(gaps.len(), 1);
    assert!(gaps[0].message.contains("C1"));
    assert!(gaps[0].message.contains("acme"));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.unused.is_empty());
    assert!(recorder.messages(Level::Error).is_empty());
    assert!(recorder.messages(Level::Unused).is_empty());
    assert_eq!(recorder.messages(Level::Warn).len(), 1);
}

#[test]
fn test_ftp_datasheet_fails() {
    let components = format!("{}  datasheet: ftp://x\n", COMPONENTS);
    let db = Database::parse(SUPPLIERS, &components, CONFIGURATIONS).unwrap();
    let recorder = Recorder::new();

    let err = Validator::new(&db, &recorder).run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidUrl);
    assert_eq!(err.entity(), &Entity::Component("C1".into()));
    assert!(err.message().contains("ftp://x"));
    assert_eq!(recorder.messages(Level::Error), vec![err.to_string()]);
}

#[test]
fn test_min_greater_than_max_fails() {
    let db = DatabaseBuilder::new()
        .with_section("extras", section(5, 4, 3, vec!["C1"]))
        .build();
    let recorder = Recorder::new();

    let err = Validator::new(&db, &recorder).run().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MinAboveMax);
    assert_eq!(err.entity(), &Entity::Section("extras".into()));
}

#[test]
fn test_section_bounds_property() {
    let cases = [
        (0, 0, 0, None),
        (0, 3, 5, None),
        (2, 2, 2, None),
        (-1, 0, 5, Some(ErrorKind::NegativeMinimum)),
        (4, 4, 3, Some(ErrorKind::MinAboveMax)),
        (1, 6, 5, Some(ErrorKind::ValueAboveMax)),
        (2, 1, 5, Some(ErrorKind::ValueBelowMin)),
    ];

    for (min, value, max, expected) in cases {
        let db = DatabaseBuilder::new()
            .with_section("extras", section(min, value, max, vec![]))
            .build();
        let recorder = Recorder::new();
        let result = Validator::new(&db, &recorder).run();

        match expected {
            None => assert!(result.is_ok(), "min={} value={} max={}", min, value, max),
            Some(kind) => assert_eq!(result.unwrap_err().kind(), kind),
        }
    }
}

#[test]
fn test_supplier_property() {
    let currencies = [("USD", true), ("EUR", true), ("GBP", false), ("usd", false)];
    for (currency, valid) in currencies {
        let supplier = Record::new()
            .with("title", "Shop")
            .with("homepage", "https://shop.example.com")
            .with("currency", currency);
        let db = DatabaseBuilder::new().with_supplier("acme", supplier).build();
        let recorder = Recorder::new();
        assert_eq!(
            Validator::new(&db, &recorder).run().is_ok(),
            valid,
            "{}",
            currency
        );
    }
}

#[test]
fn test_extra_key_on_either_side_is_named() {
    let db = DatabaseBuilder::new()
        .with_section("extras", section(0, 0, 1, vec![]))
        .with_config_field("section_order", vec!["extras", "phantom"])
        .build();
    let recorder = Recorder::new();
    let err = Validator::new(&db, &recorder).run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedSection);
    assert!(err.message().contains("phantom"));

    let db = DatabaseBuilder::new()
        .with_section("extras", section(0, 0, 1, vec![]))
        .with_config_field("section_order", Vec::<&str>::new())
        .build();
    let recorder = Recorder::new();
    let err = Validator::new(&db, &recorder).run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnorderedSection);
    assert!(err.message().contains("extras"));
}

#[test]
fn test_obsolete_reference_rules() {
    let obsolete = |replacement: Option<&str>| {
        let record = Record::new().with("title", "Old part").with("obsolete", true);
        match replacement {
            Some(id) => record.with("replacement", id),
            None => record,
        }
    };

    // With a replacement: warning only, replacement becomes used
    let db = DatabaseBuilder::new()
        .with_component("OLD", obsolete(Some("NEW")))
        .with_component("NEW", DatabaseBuilder::part("New part"))
        .with_section("extras", section(0, 0, 1, vec!["OLD"]))
        .build();
    let recorder = Recorder::new();
    let report = Validator::new(&db, &recorder).run().unwrap();
    assert_eq!(report.warnings_of(WarningKind::ObsoleteReferenced).count(), 1);
    assert!(report.used.contains("NEW"));
    assert!(report.unused.is_empty());

    // Without one: fatal wherever it is referenced
    let db = DatabaseBuilder::new()
        .with_component("OLD", obsolete(None))
        .with_section("extras", section(0, 0, 1, vec!["OLD"]))
        .build();
    let recorder = Recorder::new();
    let err = Validator::new(&db, &recorder).run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ObsoleteWithoutReplacement);
    assert!(recorder
        .messages(Level::Warn)
        .iter()
        .any(|w| w.contains("OLD")));
}

#[test]
fn test_self_replacement_fails() {
    let db = DatabaseBuilder::new()
        .with_component(
            "C1",
            DatabaseBuilder::part("Capacitor")
                .with("obsolete", true)
                .with("replacement", "C1"),
        )
        .build();
    let recorder = Recorder::new();
    let err = Validator::new(&db, &recorder).run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SelfReplacement);
}

#[test]
fn test_unknown_reference_fails_regardless_of_quantity() {
    let references = [
        Value::from("GHOST"),
        Value::List(vec![Value::Int(3), Value::from("GHOST")]),
        Value::List(vec![Value::from("3"), Value::from("GHOST")]),
    ];
    for reference in references {
        let db = DatabaseBuilder::new()
            .with_config_field("components", vec![reference])
            .build();
        let recorder = Recorder::new();
        assert!(Validator::new(&db, &recorder).run().is_err());
    }
}

#[test]
fn test_unused_components_reported_once() {
    let db = DatabaseBuilder::new()
        .with_component("R1", DatabaseBuilder::part("Resistor"))
        .with_component("R2", DatabaseBuilder::part("Resistor"))
        .build();
    let recorder = Recorder::new();

    let report = Validator::new(&db, &recorder).run().unwrap();

    assert_eq!(report.unused, vec!["R1", "R2"]);
    assert_eq!(recorder.messages(Level::Unused), vec!["R1", "R2"]);
}

#[test]
fn test_quantity_pairs_and_bare_ids_mark_the_same_usage() {
    let db = DatabaseBuilder::new()
        .with_component("R1", DatabaseBuilder::part("Resistor"))
        .with_section(
            "extras",
            section(0, 0, 1, vec![]).with(
                "components",
                vec![
                    Value::List(vec![Value::Int(4), Value::from("R1")]),
                    Value::from("R1"),
                ],
            ),
        )
        .build();
    let recorder = Recorder::new();

    let report = Validator::new(&db, &recorder).run().unwrap();

    assert_eq!(report.used.len(), 2);
    assert!(report.unused.is_empty());
}

#[test]
fn test_trace_goes_through_log() {
    let db = DatabaseBuilder::new()
        .with_section("extras", section(0, 0, 1, vec![]))
        .build();
    let recorder = Recorder::new();

    Validator::new(&db, &recorder).run().unwrap();

    let trace = recorder.messages(Level::Log);
    assert!(trace.contains(&"Checking supplier: acme".to_string()));
    assert!(trace.contains(&"Checking component: C1".to_string()));
    assert!(trace.contains(&"Checking configurable section extras".to_string()));
    assert_eq!(trace.last().map(String::as_str), Some("Validation complete."));
}

#[test]
fn test_passes_run_in_order() {
    // Broken supplier and broken section: the supplier pass fails first
    let db = DatabaseBuilder::new()
        .with_supplier("acme", Record::new().with("title", "ACME"))
        .with_section("extras", section(5, 4, 3, vec![]))
        .build();
    let recorder = Recorder::new();

    let err = Validator::new(&db, &recorder).run().unwrap_err();

    assert_eq!(err.entity(), &Entity::Supplier("acme".into()));
    assert!(recorder
        .messages(Level::Log)
        .iter()
        .all(|line| !line.contains("Checking component")));
}
