//! Integration tests for the recase public API

use recase::{convert, source_names, target_names, CaseId, ConvertError, Registry};

#[test]
fn test_lower_camel_to_camel() {
    assert_eq!(convert("fooBarBaz", "camelCase", "CamelCase").unwrap(), "FooBarBaz");
    assert_eq!(convert("fooBar", "camelCase", "CamelCase").unwrap(), "FooBar");
    assert_eq!(convert("foo", "camelCase", "CamelCase").unwrap(), "Foo");
}

#[test]
fn test_snake_to_macro() {
    assert_eq!(convert("foo_bar_baz", "snake_case", "MACRO_CASE").unwrap(), "FOO_BAR_BAZ");
    assert_eq!(convert("foo_bar", "snake_case", "MACRO_CASE").unwrap(), "FOO_BAR");
    assert_eq!(convert("foo", "snake_case", "MACRO_CASE").unwrap(), "FOO");
}

#[test]
fn test_macro_to_camel() {
    assert_eq!(convert("FOO_BAR_BAZ", "MACRO_CASE", "CamelCase").unwrap(), "FooBarBaz");
    assert_eq!(convert("FOO_BAR", "MACRO_CASE", "CamelCase").unwrap(), "FooBar");
    assert_eq!(convert("FOO", "MACRO_CASE", "CamelCase").unwrap(), "Foo");
}

#[test]
fn test_camel_to_snake() {
    assert_eq!(convert("fooBar", "camelCase", "snake_case").unwrap(), "foo_bar");
}

#[test]
fn test_space_case_round_trips_prose() {
    assert_eq!(
        convert("what is your name", "space case", "snake_case").unwrap(),
        "what_is_your_name"
    );
    // The "prose" name and the derived "space" alias hit the same strategy
    assert_eq!(
        convert("Keep My Casing", "prose", "space").unwrap(),
        "Keep My Casing"
    );
}

#[test]
fn test_leet_substitution() {
    assert_eq!(convert("foo", "camelCase", "leet").unwrap(), "f00");
    assert_eq!(convert("I am very cool", "space case", "leet").unwrap(), "1 4m v32y (00l");
    // "1337" is an explicit alias of leet
    assert_eq!(convert("foo", "camelCase", "1337").unwrap(), "f00");
}

#[test]
fn test_dank_preserves_length_and_letters() {
    let text = "what is your name";
    let out = convert(text, "space", "dank").unwrap();
    assert_eq!(out.len(), text.len());
    assert_eq!(out.to_lowercase(), text);
}

#[test]
fn test_ultraleet_is_at_least_as_long_as_leet() {
    let text = "sphinx of black quartz judge my vow";
    let plain = convert(text, "space", "leet").unwrap();
    for _ in 0..16 {
        let ultra = convert(text, "space", "ultraleet").unwrap();
        assert!(
            ultra.chars().count() >= plain.chars().count(),
            "ultra {ultra:?} shorter than leet {plain:?}"
        );
    }
}

#[test]
fn test_decode_only_name_rejected_as_source() {
    for name in ["dank", "leet", "1337", "ultraleet"] {
        let err = convert("foo_bar", name, "snake_case").unwrap_err();
        match err {
            ConvertError::UnknownSourceCase { requested, supported } => {
                assert_eq!(requested, name);
                assert!(!supported.contains(&name.to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_decode_only_id_rejected_as_source() {
    for id in [CaseId::Dank, CaseId::Leet, CaseId::UltraLeet] {
        let err = convert("foo_bar", id, "snake_case").unwrap_err();
        match err {
            ConvertError::UnsupportedAsSource(got) => assert_eq!(got, id),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_unknown_cases_are_reported_with_valid_names() {
    let err = convert("FooBar", "PASCAL_CASE", "snake_case").unwrap_err();
    match err {
        ConvertError::UnknownSourceCase { requested, supported } => {
            assert_eq!(requested, "PASCAL_CASE");
            assert!(supported.contains(&"snake_case".to_string()));
            assert!(supported.contains(&"CamelCase".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = convert("FooBar", "CamelCase", "unknown").unwrap_err();
    match err {
        ConvertError::UnknownTargetCase { requested, supported } => {
            assert_eq!(requested, "unknown");
            assert!(supported.contains(&"dank".to_string()));
            assert!(supported.contains(&"MACRO_CASE".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_error_messages_name_the_offender() {
    let err = convert("x", "nope", "snake_case").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'nope'"), "{msg}");
    assert!(msg.contains("snake_case"), "{msg}");

    let msg = convert("x", CaseId::Dank, "snake_case").unwrap_err().to_string();
    assert!(msg.contains("dank"), "{msg}");
}

#[test]
fn test_empty_input_renders_empty_for_every_target() {
    for target in target_names() {
        assert_eq!(
            convert("", "snake_case", target).unwrap(),
            "",
            "target {target:?}"
        );
    }
}

#[test]
fn test_unmatched_input_renders_empty() {
    // MACRO text has no lowercase runs for the snake pattern to find
    assert_eq!(convert("FOO_BAR", "snake_case", "CamelCase").unwrap(), "");
    assert_eq!(convert("1234", "camelCase", "snake_case").unwrap(), "");
}

#[test]
fn test_case_id_constants_match_names() {
    assert_eq!(
        convert("foo_bar", CaseId::Snake, CaseId::Camel).unwrap(),
        convert("foo_bar", "snake_case", "CamelCase").unwrap()
    );
    assert_eq!(
        convert("FooBar", CaseId::Camel, CaseId::Macro).unwrap(),
        "FOO_BAR"
    );
}

#[test]
fn test_alias_equivalence_for_deterministic_targets() {
    let targets = [
        "CamelCase", "camelCase", "snake_case", "MACRO_CASE", "space case", "leet",
    ];
    for target in targets {
        assert_eq!(
            convert("FooBarBaz", "PascalCase", target).unwrap(),
            convert("FooBarBaz", "CamelCase", target).unwrap(),
            "target {target:?}"
        );
        assert_eq!(
            convert("fooBarBaz", "lowerCamelCase", target).unwrap(),
            convert("fooBarBaz", "camelCase", target).unwrap(),
            "target {target:?}"
        );
    }
}

#[test]
fn test_name_enumeration() {
    let sources = source_names();
    let targets = target_names();

    // Every source identifier is also a valid target identifier
    for name in &sources {
        assert!(targets.contains(name), "source {name:?} missing from targets");
    }
    // Decode-only identifiers appear on the target side alone
    for name in ["dank", "leet", "ultraleet", "ultra1337"] {
        assert!(targets.contains(&name));
        assert!(!sources.contains(&name));
    }

    let mut sorted = sources.clone();
    sorted.sort_unstable();
    assert_eq!(sources, sorted);
}

#[test]
fn test_dedicated_registry_matches_global() {
    let registry = Registry::new().unwrap();
    assert_eq!(
        registry.convert("fooBar", "camelCase", "snake_case").unwrap(),
        convert("fooBar", "camelCase", "snake_case").unwrap()
    );
    assert_eq!(registry.source_names(), source_names());
}
