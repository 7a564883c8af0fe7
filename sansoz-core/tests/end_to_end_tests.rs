//! End-to-end expansion tests over the embedded Kazakh data

use sansoz_core::{
    cardinal_word, expand_numbers, rewrite_glued, rewrite_suffix_pair, LanguageConfig,
    LanguageData, NumeralError, NumeralExpander, Ordinalizer, RuleHit, RuleKind, SuffixPair,
};
use std::sync::Arc;
use std::thread;

fn expander() -> NumeralExpander {
    NumeralExpander::for_language("kk").unwrap()
}

#[test]
fn test_mixed_sentence_rule_order() {
    let expander = expander();
    let report = expander
        .expand_with_report("3 наурыз 2023 жыл 5-ші 30 қарашада")
        .unwrap();

    assert_eq!(
        report.text,
        "үшінші наурыз екі мың жиырма үшінші жыл бесінші отызыншы қарашада"
    );
    assert_eq!(
        report.hits,
        vec![
            RuleHit {
                rule: RuleKind::DayMonth,
                matches: 2
            },
            RuleHit {
                rule: RuleKind::YearMarker,
                matches: 1
            },
            RuleHit {
                rule: RuleKind::OrdinalSuffix,
                matches: 1
            },
        ]
    );
    assert!(report.is_complete());
}

#[test]
fn test_day_month_scenario() {
    let data = sansoz_core::get_language_data("kk").unwrap();
    let speller = sansoz_core::speller_for("kk").unwrap();
    let ordinalizer = Ordinalizer::new(speller.as_ref(), data.ordinals());

    let expected = format!("{} наурыз", ordinalizer.to_ordinal(3).unwrap());
    assert_eq!(expand_numbers("3 наурыз").unwrap(), expected);
}

#[test]
fn test_all_months_recognised() {
    let expander = expander();
    for month in expander.language().months() {
        let text = format!("1 {month}");
        assert_eq!(expander.expand(&text).unwrap(), format!("бірінші {month}"));
    }
}

#[test]
fn test_year_marker_with_case_ending() {
    assert_eq!(
        expand_numbers("1991 жылы").unwrap(),
        "бір мың тоғыз жүз тоқсан бірінші жылы"
    );
}

#[test]
fn test_year_without_marker_is_not_spelled() {
    // Four digits with no marker match neither the year rule nor the
    // 1-3 digit bare-number rule
    let report = expander().expand_with_report("2023 кітап").unwrap();
    assert_eq!(report.text, "2023 кітап");
    assert!(report.hits.is_empty());
    assert!(!report.is_complete());
}

#[test]
fn test_group_suffixes() {
    assert_eq!(expand_numbers("5-еу келді").unwrap(), "бесеу келді");
    assert_eq!(expand_numbers("10-нан").unwrap(), "оннан");
    assert_eq!(expand_numbers("3-те").unwrap(), "үште");
}

#[test]
fn test_ordinal_suffix_on_large_number() {
    assert_eq!(expand_numbers("2024-ші").unwrap(), "екі мың жиырма төртінші");
    assert_eq!(expand_numbers("100-інші").unwrap(), "жүзінші");
}

#[test]
fn test_unknown_suffix_left_to_bare_number_rule() {
    assert_eq!(expand_numbers("5-xyz").unwrap(), "бес-xyz");
}

#[test]
fn test_glued_tokens() {
    assert_eq!(expand_numbers("example123").unwrap(), "example");
    assert_eq!(expand_numbers("123example").unwrap(), "example");
    assert_eq!(expand_numbers("COVID19 індеті").unwrap(), "COVID індеті");
    assert_eq!(expand_numbers("ab12cd").unwrap(), "abcd");
}

#[test]
fn test_bare_numbers() {
    assert_eq!(expand_numbers("5").unwrap(), "бес");
    assert_eq!(expand_numbers("Бағасы 250 теңге").unwrap(), "Бағасы екі жүз елу теңге");
    assert_eq!(expand_numbers("1, 2, 3").unwrap(), "бір, екі, үш");
}

#[test]
fn test_long_digit_runs_kept() {
    assert_eq!(expand_numbers("12345").unwrap(), "12345");
}

#[test]
fn test_digit_free_text_unchanged() {
    let text = "Бүгін ауа райы жақсы.";
    assert_eq!(expand_numbers(text).unwrap(), text);
    assert_eq!(expand_numbers("").unwrap(), "");
}

#[test]
fn test_out_of_range_literal_fails_loudly() {
    let err = expand_numbers("123456789012345678901234-ші").unwrap_err();
    match err {
        NumeralError::OutOfRange { literal, language } => {
            assert_eq!(literal, "123456789012345678901234");
            assert_eq!(language, "kk");
        }
        other => panic!("Expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn test_suffix_pair_dispatch_public_api() {
    let data = sansoz_core::get_language_data("kk").unwrap();
    let speller = sansoz_core::speller_for("kk").unwrap();
    let ordinalizer = Ordinalizer::new(speller.as_ref(), data.ordinals());

    let ordinal = SuffixPair {
        number: "5",
        suffix: "ші",
    };
    assert_eq!(
        rewrite_suffix_pair(&ordinal, data.suffixes(), &ordinalizer).unwrap(),
        ordinalizer.to_ordinal(5).unwrap()
    );

    let group = SuffixPair {
        number: "5",
        suffix: "еу",
    };
    assert_eq!(
        rewrite_suffix_pair(&group, data.suffixes(), &ordinalizer).unwrap(),
        format!("{}еу", cardinal_word(5, "kk").unwrap())
    );

    let unknown = SuffixPair {
        number: "5",
        suffix: "қой",
    };
    assert_eq!(
        rewrite_suffix_pair(&unknown, data.suffixes(), &ordinalizer).unwrap(),
        "5-қой"
    );
}

#[test]
fn test_glued_round_trip() {
    assert_eq!(rewrite_glued("example123"), "example");
    assert_eq!(rewrite_glued("123example"), "example");
}

#[test]
fn test_injected_fixture_language() {
    let config = LanguageConfig::from_toml_str(
        r#"
        [metadata]
        code = "kk-mini"
        name = "Kazakh (mini)"
        speller = "kk"

        [suffixes]
        ordinal = ["ші"]
        group = ["еу"]

        [calendar]
        months = ["мамыр"]
        year_marker = "ж."

        [alphabet]
        chars = "abc"

        [ordinals]
        "тоғыз" = "тоғызыншы"
        "#,
    )
    .unwrap();
    let expander = NumeralExpander::from_data(LanguageData::from_config(&config).unwrap()).unwrap();

    assert_eq!(expander.expand("9 мамыр").unwrap(), "тоғызыншы мамыр");
    // Month not in the fixture: falls through to the bare-number rule
    assert_eq!(expander.expand("9 наурыз").unwrap(), "тоғыз наурыз");
    // Year marker is matched literally, '.' included
    assert_eq!(expander.expand("1999 ж.").unwrap(), "бір мың тоғыз жүз тоқсан тоғызыншы ж.");
}

#[test]
fn test_shared_across_threads() {
    let expander = Arc::new(expander());
    let inputs = ["3 наурыз", "5-ші", "example123", "250"];
    let expected = ["үшінші наурыз", "бесінші", "example", "екі жүз елу"];

    let handles: Vec<_> = inputs
        .iter()
        .map(|input| {
            let expander = Arc::clone(&expander);
            let input = input.to_string();
            thread::spawn(move || expander.expand(&input).unwrap())
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
