use core::cmp::Ordering;

use crate::compare::tertiary;
use crate::options::{CollatorOptions, Strength};
use crate::tables::CollationTables;
use crate::weights;

/// быстрое сравнение строк, которые до первого отличия по первому уровню состоят из "простых" ASCII-символов:
/// один набор весов, не переменный, не начинает последовательность.
///
/// None - быстрый путь не применим, или строки не различаются ни на одном из уровней
pub fn try_ascii(
    tables: &CollationTables,
    a: &[u32],
    b: &[u32],
    options: &CollatorOptions,
) -> Option<Ordering>
{
    let table = tables.weights();

    let simple = |code: u32| match table.is_starter(code) {
        true => None,
        false => table.ascii(code),
    };

    // первые отличия на 2м и 3м уровнях
    let mut secondary = Ordering::Equal;
    let mut tertiary_order = Ordering::Equal;

    let mut i = 0;

    loop {
        match (a.get(i), b.get(i)) {
            (Some(&x), Some(&y)) => {
                let wx = simple(x)?;

                if x == y {
                    i += 1;
                    continue;
                }

                let wy = simple(y)?;

                match weights::primary(wx).cmp(&weights::primary(wy)) {
                    Ordering::Equal => (),
                    ordering => return Some(ordering),
                }

                if secondary == Ordering::Equal {
                    secondary = weights::secondary(wx).cmp(&weights::secondary(wy));
                }

                if tertiary_order == Ordering::Equal {
                    tertiary_order =
                        tertiary(wx, options.case_first).cmp(&tertiary(wy, options.case_first));
                }
            }
            // у одной из строк есть ещё один вес первого уровня
            (None, Some(&y)) => return simple(y).map(|_| Ordering::Less),
            (Some(&x), None) => return simple(x).map(|_| Ordering::Greater),
            (None, None) => break,
        }

        i += 1;
    }

    // первые уровни равны
    if options.strength >= Strength::Secondary && secondary != Ordering::Equal {
        return Some(secondary);
    }

    if options.strength >= Strength::Tertiary && tertiary_order != Ordering::Equal {
        return Some(tertiary_order);
    }

    None
}
