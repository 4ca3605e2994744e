use core::cmp::Ordering::{self, Equal, Greater, Less};

use uca_collator::{
    AlternateHandling, CaseFirst, Collator, CollatorOptions, Comparison, Resolution, Strength,
};
use uca_collator_tests::{collator, collator_with, without_tiebreak, TABLES};

fn detailed(collator: &mut Collator, a: &str, b: &str) -> Comparison
{
    collator.compare_detailed(a.as_bytes(), b.as_bytes())
}

fn assert_resolved(collator: &mut Collator, a: &str, b: &str, ordering: Ordering, resolution: Resolution)
{
    assert_eq!(
        detailed(collator, a, b),
        Comparison {
            ordering,
            resolution
        },
        "{} / {}",
        a,
        b
    );

    // обратный порядок
    assert_eq!(
        detailed(collator, b, a),
        Comparison {
            ordering: ordering.reverse(),
            resolution
        },
        "{} / {}",
        b,
        a
    );
}

#[test]
fn identical_bytes()
{
    let mut collator = collator();

    assert_eq!(
        detailed(&mut collator, "Élodie", "Élodie"),
        Comparison {
            ordering: Equal,
            resolution: Resolution::Identical
        }
    );
}

#[test]
fn ascii_fast_path()
{
    let mut collator = collator();

    assert_resolved(&mut collator, "Edgar", "Frank", Less, Resolution::AsciiFastPath);
    assert_resolved(&mut collator, "Frank", "frank", Greater, Resolution::AsciiFastPath);
    assert_resolved(&mut collator, "abc", "abcd", Less, Resolution::AsciiFastPath);
    assert_resolved(&mut collator, "ab", "Abc", Less, Resolution::AsciiFastPath);
    assert_resolved(&mut collator, "2024", "2025", Less, Resolution::AsciiFastPath);

    // первичные веса решают раньше регистра
    assert_resolved(&mut collator, "Ab", "ac", Less, Resolution::AsciiFastPath);
}

#[test]
fn ascii_fast_path_steps_aside()
{
    let mut collator = collator();

    // пробел - переменный вес
    assert_ne!(detailed(&mut collator, "a b", "ab").resolution, Resolution::AsciiFastPath);
    // l начинает сокращение
    assert_ne!(detailed(&mut collator, "la", "lb").resolution, Resolution::AsciiFastPath);
    // не ASCII
    assert_ne!(detailed(&mut collator, "é", "e").resolution, Resolution::AsciiFastPath);
}

#[test]
fn case_order()
{
    let mut lower_first = collator();
    assert_eq!(lower_first.collate("Frank", "frank"), Greater);
    assert_eq!(lower_first.collate("Élodie", "élodie"), Greater);

    let mut upper_first = collator_with(CollatorOptions {
        case_first: CaseFirst::Upper,
        ..Default::default()
    });
    assert_eq!(upper_first.collate("Frank", "frank"), Less);
    assert_eq!(upper_first.collate("Élodie", "élodie"), Less);

    // регистр не влияет на первый уровень
    assert_eq!(upper_first.collate("apple", "Banana"), Less);
}

#[test]
fn secondary_difference()
{
    let mut collator = collator();

    assert_resolved(
        &mut collator,
        "Élodie",
        "Elodie",
        Greater,
        Resolution::Level(Strength::Secondary),
    );

    // диакритика важнее регистра
    assert_resolved(
        &mut collator,
        "élodie",
        "Elodie",
        Greater,
        Resolution::Level(Strength::Secondary),
    );
}

#[test]
fn prefix_and_length()
{
    let mut collator = collator();

    assert_resolved(
        &mut collator,
        "Réunionnais",
        "Réunionnaise",
        Less,
        Resolution::PrefixLength,
    );

    assert_resolved(&mut collator, "가", "각", Less, Resolution::PrefixLength);
}

#[test]
fn variable_weighting()
{
    let mut shifted = collator();
    assert_resolved(
        &mut shifted,
        "foo baz",
        "foobaz",
        Less,
        Resolution::Level(Strength::Quaternary),
    );

    let mut tertiary = collator_with(CollatorOptions {
        strength: Strength::Tertiary,
        tiebreak: false,
        ..Default::default()
    });
    assert_resolved(&mut tertiary, "foo baz", "foobaz", Equal, Resolution::Equal);

    let mut non_ignorable = collator_with(CollatorOptions {
        alternate: AlternateHandling::NonIgnorable,
        ..Default::default()
    });
    assert_resolved(
        &mut non_ignorable,
        "foo baz",
        "foobaz",
        Less,
        Resolution::Level(Strength::Primary),
    );

    // без сдвига 4го уровня нет: полностью игнорируемый хвост не делает строку больше, решают байты
    assert_resolved(&mut non_ignorable, "a", "a\u{0000}", Less, Resolution::Tiebreak);
}

#[test]
fn middle_dot()
{
    let mut collator = collator();

    // l· - сокращение с отличием на втором уровне
    assert_resolved(
        &mut collator,
        "l\u{00B7}a",
        "la",
        Greater,
        Resolution::Level(Strength::Secondary),
    );

    // x· - просто пунктуация
    assert_resolved(
        &mut collator,
        "x\u{00B7}a",
        "xa",
        Less,
        Resolution::Level(Strength::Quaternary),
    );
}

#[test]
fn contractions_and_canonical_equivalence()
{
    let mut collator = collator_with(without_tiebreak());

    // разрывное совпадение и декомпозиция дают одно и то же
    assert_resolved(
        &mut collator,
        "\u{0438}\u{0334}\u{0306}",
        "\u{0439}\u{0334}",
        Equal,
        Resolution::Equal,
    );

    // заблокированное бреве
    assert_resolved(
        &mut collator,
        "\u{0438}\u{0301}\u{0306}",
        "\u{0439}\u{0301}",
        Less,
        Resolution::Level(Strength::Primary),
    );

    for (a, b) in [
        ("\u{00C9}", "E\u{0301}"),
        ("\u{212B}", "\u{00C5}"),
        ("\u{1E69}", "s\u{0323}\u{0307}"),
        ("s\u{0307}\u{0323}", "\u{1E63}\u{0307}"),
        ("\u{1E09}", "\u{00E7}\u{0301}"),
        ("\u{0FB2}\u{0F81}", "\u{0FB2}\u{0F80}\u{0F71}"),
        ("가", "\u{1100}\u{1161}"),
    ] {
        assert_eq!(collator.collate(a, b), Equal, "{} / {}", a, b);
    }
}

#[test]
fn tibetan_sequences()
{
    let mut collator = collator();

    assert_eq!(collator.collate("\u{0FB2}", "\u{0FB2}\u{0F71}"), Less);
    assert_eq!(collator.collate("\u{0FB2}\u{0F71}x", "\u{0FB2}\u{0F80}"), Less);
    assert_eq!(collator.collate("\u{0FB2}\u{0F80}", "\u{0FB2}\u{0F71}\u{0F80}"), Less);
    assert_eq!(
        collator.compare_detailed("\u{0FB2}\u{0F71}\u{0F80}\u{0334}".as_bytes(), "\u{0FB2}\u{0F71}\u{0F80}".as_bytes()),
        Comparison {
            ordering: Greater,
            resolution: Resolution::Level(Strength::Secondary)
        }
    );
}

#[test]
fn implicit_weights_order()
{
    let mut collator = collator();

    // tangut < хань (основные) < хань (прочие) < прочие < явно заданный U+FFFD
    let ordered = ["\u{17000}", "\u{4E00}", "\u{9FA5}", "\u{3400}", "\u{20000}", "\u{0378}", "\u{FFFD}"];

    for pair in ordered.windows(2) {
        assert_eq!(collator.collate(pair[0], pair[1]), Less, "{:?}", pair);
    }

    // явно заданные веса раньше вычисляемых
    assert_eq!(collator.collate("z", "\u{4E00}"), Less);
}

#[test]
fn invalid_utf8()
{
    let mut collator = collator_with(without_tiebreak());

    assert_eq!(
        collator.compare_detailed(b"a\xFF", "a\u{FFFD}".as_bytes()),
        Comparison {
            ordering: Equal,
            resolution: Resolution::Equal
        }
    );

    // обрезанная последовательность - один заменяющий символ
    assert_eq!(collator.compare(b"a\xE2\x82", "a\u{FFFD}".as_bytes()), Equal);
    assert_eq!(collator.compare(b"a\xE2\x82", b"a\xFF\xFF"), Less);

    let mut tiebreak = collator_with(CollatorOptions::default());
    assert_eq!(
        tiebreak.compare_detailed(b"a\xFF", "a\u{FFFD}".as_bytes()),
        Comparison {
            ordering: Greater,
            resolution: Resolution::Tiebreak
        }
    );
}

#[test]
fn strength_cutoff()
{
    let primary = CollatorOptions {
        strength: Strength::Primary,
        tiebreak: false,
        ..Default::default()
    };
    let secondary = CollatorOptions {
        strength: Strength::Secondary,
        ..primary
    };

    let mut collator = collator_with(primary);
    assert_eq!(collator.collate("Élodie", "elodie"), Equal);
    assert_eq!(collator.collate("Frank", "frank"), Equal);
    assert_eq!(collator.collate("Elodie", "Frank"), Less);

    let mut collator = collator_with(secondary);
    assert_eq!(collator.collate("Élodie", "elodie"), Greater);
    assert_eq!(collator.collate("Frank", "frank"), Equal);
}

#[test]
fn tail_without_weights_on_compared_levels()
{
    let tertiary = CollatorOptions {
        strength: Strength::Tertiary,
        tiebreak: false,
        ..Default::default()
    };

    // дефис при сдвиге весит только на 4м уровне
    assert_resolved(&mut collator_with(tertiary), "a", "a-", Equal, Resolution::Equal);
    assert_resolved(&mut collator(), "a", "a-", Less, Resolution::PrefixLength);

    let primary = CollatorOptions {
        strength: Strength::Primary,
        ..tertiary
    };

    assert_resolved(&mut collator_with(primary), "a", "a\u{0301}", Equal, Resolution::Equal);
    assert_resolved(&mut collator_with(primary), "a", "a\u{0000}", Equal, Resolution::Equal);
    assert_eq!(collator().collate("a", "a\u{0301}"), Less);

    // непустой хвост с весами первого уровня решает при любой силе
    assert_resolved(&mut collator_with(primary), "a", "a\u{4E00}", Less, Resolution::PrefixLength);
}

#[test]
fn sort_names()
{
    let mut names = [
        "چنگیز", "Éloi", "Ötzi", "Melissa", "صدام", "Mélissa", "Overton", "Elrond",
    ];

    collator().sort(&mut names);

    assert_eq!(
        names,
        ["Éloi", "Elrond", "Melissa", "Mélissa", "Ötzi", "Overton", "چنگیز", "صدام"]
    );
}

#[test]
fn sort_byte_strings()
{
    let mut items: Vec<Vec<u8>> = ["b", "A", "a", "á", "B"]
        .iter()
        .map(|s| s.as_bytes().to_vec())
        .collect();

    collator().sort(&mut items);

    let sorted: Vec<&str> = items
        .iter()
        .map(|bytes| core::str::from_utf8(bytes).unwrap())
        .collect();

    assert_eq!(sorted, ["a", "A", "á", "b", "B"]);
}

#[test]
fn collators_share_tables_across_threads()
{
    let tables = &*TABLES;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0 .. 4)
            .map(|_| {
                scope.spawn(move || {
                    let mut collator = Collator::new(tables, CollatorOptions::default());

                    (0 .. 100)
                        .map(|_| collator.collate("Élodie", "Elodie"))
                        .all(|ordering| ordering == Greater)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
