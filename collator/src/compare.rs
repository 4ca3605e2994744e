use core::cmp::Ordering;

use crate::options::{CaseFirst, CollatorOptions, Strength};
use crate::weights::{self, SENTINEL};

/// вес 4го уровня для всего, что не является переменным весом
const QUATERNARY_DEFAULT: u16 = 0xFFFF;

/// сравнить массивы весов по уровням, не составляя ключей. массив заканчивается на SENTINEL или вместе со срезом.
/// None - массивы равны на всех сравниваемых уровнях
pub fn compare_levels(
    a: &[u32],
    b: &[u32],
    options: &CollatorOptions,
) -> Option<(Strength, Ordering)>
{
    for level in Strength::LEVELS {
        if !options.compares(level) {
            break;
        }

        let mut a_pos = 0;
        let mut b_pos = 0;

        loop {
            let a_value = next_value(a, &mut a_pos, level, options);
            let b_value = next_value(b, &mut b_pos, level, options);

            match a_value.cmp(&b_value) {
                Ordering::Equal => match a_value {
                    Some(_) => continue,
                    None => break,
                },
                ordering => return Some((level, ordering)),
            }
        }
    }

    None
}

/// следующее ненулевое значение уровня; None - массив закончился (SENTINEL или конец среза)
#[inline(always)]
fn next_value(cea: &[u32], pos: &mut usize, level: Strength, options: &CollatorOptions)
    -> Option<u16>
{
    loop {
        let w = match cea.get(*pos) {
            Some(&w) if w != SENTINEL => w,
            _ => return None,
        };

        *pos += 1;

        let value = level_value(w, level, options);

        if value != 0 {
            return Some(value);
        }
    }
}

/// значение уровня набора весов с учётом опций: при сдвиге переменные веса видны только на 4м уровне,
/// CaseFirst::Upper меняет местами блоки весов строчных и прописных букв
#[inline(always)]
pub fn level_value(w: u32, level: Strength, options: &CollatorOptions) -> u16
{
    let shifted = options.is_shifted() && weights::is_variable(w);

    match level {
        Strength::Primary => match shifted {
            true => 0,
            false => weights::primary(w),
        },
        Strength::Secondary => match shifted {
            true => 0,
            false => weights::secondary(w),
        },
        Strength::Tertiary => match shifted {
            true => 0,
            false => tertiary(w, options.case_first),
        },
        Strength::Quaternary => match (shifted, w) {
            (true, _) => weights::primary(w),
            (false, 0) => 0,
            (false, _) => QUATERNARY_DEFAULT,
        },
    }
}

/// вес третьего уровня с учётом порядка регистров
#[inline(always)]
pub fn tertiary(w: u32, case_first: CaseFirst) -> u16
{
    let value = weights::tertiary(w);

    match case_first {
        CaseFirst::Lower => value,
        CaseFirst::Upper => match value {
            0x02 ..= 0x06 => value + 6,
            0x08 ..= 0x0C => value - 6,
            _ => value,
        },
    }
}
