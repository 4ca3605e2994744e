use uca_collator::{AlternateHandling, CaseFirst, CollatorOptions, Strength};

#[test]
fn defaults()
{
    let options = CollatorOptions::default();

    assert_eq!(options.strength, Strength::Quaternary);
    assert_eq!(options.alternate, AlternateHandling::Shifted);
    assert_eq!(options.case_first, CaseFirst::Lower);
    assert!(options.tiebreak);

    assert_eq!(serde_json::from_str::<CollatorOptions>("{}").unwrap(), options);
}

#[test]
fn kebab_case_names()
{
    let options = CollatorOptions {
        strength: Strength::Tertiary,
        alternate: AlternateHandling::NonIgnorable,
        case_first: CaseFirst::Upper,
        tiebreak: false,
    };

    let json = serde_json::to_value(options).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "strength": "tertiary",
            "alternate": "non-ignorable",
            "case-first": "upper",
            "tiebreak": false
        })
    );

    assert_eq!(serde_json::from_value::<CollatorOptions>(json).unwrap(), options);
}

#[test]
fn partial_config()
{
    let options: CollatorOptions =
        serde_json::from_str(r#"{ "strength": "primary", "case-first": "upper" }"#).unwrap();

    assert_eq!(
        options,
        CollatorOptions {
            strength: Strength::Primary,
            case_first: CaseFirst::Upper,
            ..Default::default()
        }
    );
}

#[test]
fn unknown_values_are_rejected()
{
    assert!(serde_json::from_str::<CollatorOptions>(r#"{ "strength": "identical" }"#).is_err());
    assert!(serde_json::from_str::<CollatorOptions>(r#"{ "alternate": "blanked" }"#).is_err());
}

#[test]
fn quaternary_level_needs_shifting()
{
    let shifted = CollatorOptions::default();
    let non_ignorable = CollatorOptions {
        alternate: AlternateHandling::NonIgnorable,
        ..shifted
    };

    assert!(shifted.compares(Strength::Quaternary));
    assert!(!non_ignorable.compares(Strength::Quaternary));
    assert!(non_ignorable.compares(Strength::Tertiary));

    let secondary = CollatorOptions {
        strength: Strength::Secondary,
        ..shifted
    };

    assert!(secondary.compares(Strength::Secondary));
    assert!(!secondary.compares(Strength::Tertiary));
}
