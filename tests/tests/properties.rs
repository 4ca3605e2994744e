use core::cmp::Ordering;

use proptest::prelude::*;
use uca_collator::normalize::{make_nfd, normalize};
use uca_collator::{AlternateHandling, CaseFirst, CollatorOptions, Strength};
use uca_collator_tests::{codes, collator, collator_with, string, without_tiebreak, TABLES};

/// куски строк: простой ASCII, переменные веса, сокращения, диакритика, хангыль, вычисляемые веса,
/// полностью игнорируемый U+0000
const PIECES: &[&str] = &[
    "\u{0000}", "a", "A", "b", "x", "e", "é", "É", "E\u{0301}", "l", "L", "\u{00B7}", " ", "-", ",",
    "\u{0301}", "\u{0306}", "\u{0307}", "\u{0323}", "\u{0334}", "\u{0438}", "\u{0439}", "\u{0FB2}", "\u{0F71}",
    "\u{0F80}", "\u{0F81}", "가", "각", "\u{1100}", "\u{1161}", "\u{4E00}", "\u{17000}",
];

fn text() -> impl Strategy<Value = String>
{
    prop::collection::vec(prop::sample::select(PIECES), 0 .. 8).prop_map(|pieces| pieces.concat())
}

/// сила, обработка переменных весов и регистр, без сравнения байт
fn options() -> impl Strategy<Value = CollatorOptions>
{
    (
        prop::sample::select(Strength::LEVELS.to_vec()),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(strength, shifted, upper_first)| CollatorOptions {
            strength,
            alternate: match shifted {
                true => AlternateHandling::Shifted,
                false => AlternateHandling::NonIgnorable,
            },
            case_first: match upper_first {
                true => CaseFirst::Upper,
                false => CaseFirst::Lower,
            },
            tiebreak: false,
        })
}

fn nfd(input: &str) -> String
{
    let mut chars = codes(input);
    make_nfd(&TABLES, &mut chars);
    string(&chars)
}

proptest! {
    #[test]
    fn buffers_do_not_leak_between_calls(a in text(), b in text(), c in text())
    {
        let mut reused = collator();

        reused.collate(&c, &a);
        reused.sort_key(c.as_bytes());
        let result = reused.collate(&a, &b);

        prop_assert_eq!(result, collator().collate(&a, &b));
    }

    #[test]
    fn antisymmetric(a in text(), b in text())
    {
        let mut collator = collator();

        prop_assert_eq!(collator.collate(&a, &b), collator.collate(&b, &a).reverse());
    }

    #[test]
    fn transitive(a in text(), b in text(), c in text())
    {
        let mut collator = collator();

        let mut sorted = [a, b, c];
        collator.sort(&mut sorted);

        prop_assert_ne!(collator.collate(&sorted[0], &sorted[1]), Ordering::Greater);
        prop_assert_ne!(collator.collate(&sorted[1], &sorted[2]), Ordering::Greater);
        prop_assert_ne!(collator.collate(&sorted[0], &sorted[2]), Ordering::Greater);
    }

    #[test]
    fn tiebreak_only_decides_ties(a in text(), b in text())
    {
        let with_tiebreak = collator().collate(&a, &b);
        let without = collator_with(without_tiebreak()).collate(&a, &b);

        match without {
            Ordering::Equal => prop_assert_eq!(with_tiebreak, a.as_bytes().cmp(b.as_bytes())),
            ordering => prop_assert_eq!(with_tiebreak, ordering),
        }
    }

    #[test]
    fn canonically_equivalent_strings_are_equal(a in text())
    {
        let decomposed = nfd(&a);

        prop_assert_eq!(
            collator_with(without_tiebreak()).collate(&a, &decomposed),
            Ordering::Equal,
            "{:?} / {:?}",
            a,
            decomposed
        );
    }

    #[test]
    fn normalization_is_idempotent(a in text())
    {
        let once = nfd(&a);
        prop_assert_eq!(nfd(&once), once.clone());

        // быстрый путь не меняет веса
        let mut chars = codes(&a);
        normalize(&TABLES, &mut chars);
        let mut collator = collator();
        let fast = collator.collation_elements(string(&chars).as_bytes()).to_vec();

        prop_assert_eq!(fast, collator.collation_elements(once.as_bytes()).to_vec());
    }

    #[test]
    fn sort_keys_agree_with_comparison(a in text(), b in text(), options in options())
    {
        let mut collator = collator_with(options);

        let a_key = collator.sort_key(a.as_bytes());
        let b_key = collator.sort_key(b.as_bytes());

        prop_assert_eq!(a_key.cmp(&b_key), collator.collate(&a, &b), "{} / {}", a_key, b_key);
    }
}
