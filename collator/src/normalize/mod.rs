use crate::hangul;
use crate::tables::{CollationTables, FCD_FORCE};

/// привести последовательность кодпоинтов к виду, пригодному для сопоставления: если она уже проходит
/// проверку FCD - оставить как есть, иначе - NFD
#[inline]
pub fn normalize(tables: &CollationTables, chars: &mut Vec<u32>)
{
    if !is_fcd(tables, chars) {
        make_nfd(tables, chars);
    }
}

/// быстрая проверка FCD: CCC первого кодпоинта декомпозиции каждого символа не меньше CCC последнего
/// кодпоинта декомпозиции предыдущего символа (если оба ненулевые). дополнительно - декомпозиции без
/// собственных весов и слоги хангыль требуют нормализации
pub fn is_fcd(tables: &CollationTables, chars: &[u32]) -> bool
{
    let threshold = tables.fcd_threshold();
    let mut prev_trail = 0;

    for &code in chars {
        if code < threshold {
            prev_trail = 0;
            continue;
        }

        if hangul::is_syllable(code) {
            return false;
        }

        let (lead, trail) = match tables.decompositions().fcd(code) {
            Some(FCD_FORCE) => return false,
            Some(fcd) => ((fcd >> 8) as u8, fcd as u8),
            None => {
                let ccc = tables.ccc(code);
                (ccc, ccc)
            }
        };

        if lead != 0 && lead < prev_trail {
            return false;
        }

        prev_trail = trail;
    }

    true
}

/// NFD: декомпозиция и канонический порядок, на месте
pub fn make_nfd(tables: &CollationTables, chars: &mut Vec<u32>)
{
    let threshold = tables.fcd_threshold();
    let mut i = 0;

    while i < chars.len() {
        let code = chars[i];

        if code < threshold {
            i += 1;
            continue;
        }

        if hangul::is_syllable(code) {
            let (jamo, len) = hangul::decompose(code);
            chars.splice(i ..= i, jamo[.. len].iter().copied());
            i += len;
            continue;
        }

        match tables.decomposition(code) {
            Some(decomposition) => {
                chars.splice(i ..= i, decomposition.iter().copied());
                i += decomposition.len();
            }
            None => i += 1,
        }
    }

    reorder_by(chars, |code| tables.ccc(code));
}

/// канонический порядок: нестартеры между стартерами - по возрастанию CCC, с сохранением порядка
/// кодпоинтов с равным CCC. стартеры не перемещаются
pub fn reorder_by(chars: &mut [u32], ccc: impl Fn(u32) -> u8)
{
    // пузырёк; после прохода всё правее последней перестановки уже на своих местах
    let mut end = chars.len();

    while end > 1 {
        let mut last_swap = 0;
        let mut i = 1;

        while i < end {
            let ccc_b = ccc(chars[i]);

            if ccc_b == 0 {
                i += 2;
                continue;
            }

            let ccc_a = ccc(chars[i - 1]);

            if ccc_a > ccc_b {
                chars.swap(i - 1, i);
                last_swap = i;
            }

            i += 1;
        }

        end = last_swap;
    }
}
