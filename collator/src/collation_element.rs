use crate::tables::CollationTables;

/// наибольшая длина последовательности кодпоинтов в таблице весов
const MAX_SEQUENCE: usize = 3;

/// найденные для позиции веса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollationElement<'a>
{
    /// один набор весов
    Single(u32),
    /// расширение: несколько наборов весов
    Expansion(&'a [u32]),
    /// веса, вычисленные алгоритмически
    Implicit([u32; 2]),
}

impl<'a> CollationElement<'a>
{
    /// наборы весов
    #[inline(always)]
    pub fn weights(&self) -> &[u32]
    {
        match self {
            Self::Single(w) => core::slice::from_ref(w),
            Self::Expansion(weights) => weights,
            Self::Implicit(weights) => weights,
        }
    }

    #[inline(always)]
    fn from_slice(weights: &'a [u32]) -> Self
    {
        match weights {
            [single] => Self::Single(*single),
            _ => Self::Expansion(weights),
        }
    }
}

/// веса для позиции pos: количество использованных кодпоинтов и элемент сопоставления.
///
/// при разрывном совпадении (нестартер, отделённый от начала последовательности другими нестартерами)
/// использованные нестартеры удаляются из chars
#[inline]
pub fn collation_element<'a>(
    tables: &'a CollationTables,
    chars: &mut Vec<u32>,
    pos: usize,
) -> (usize, CollationElement<'a>)
{
    let table = tables.weights();
    let code = chars[pos];

    // кодпоинты до U+00B7, не начинающие последовательностей
    if let Some(w) = table.low(code) {
        return (1, CollationElement::Single(w));
    }

    if !table.is_starter(code) {
        return (1, single(tables, code));
    }

    // начало последовательности: сначала ищем непрерывное совпадение, самое длинное

    let mut key = [code, 0, 0];
    let mut key_len = 1;
    let mut found: Option<&'a [u32]> = None;

    for len in (2 ..= MAX_SEQUENCE).rev() {
        if pos + len > chars.len() {
            continue;
        }

        if let Some(weights) = table.sequence(&chars[pos .. pos + len]) {
            key[.. len].copy_from_slice(&chars[pos .. pos + len]);
            key_len = len;
            found = Some(weights);
            break;
        }
    }

    let consumed = key_len;

    // затем - разрывное: нестартеры после совпадения, не заблокированные предыдущими нестартерами
    let mut j = pos + consumed;

    while key_len < MAX_SEQUENCE && j < chars.len() {
        let c = chars[j];
        let ccc = tables.ccc(c);

        if ccc == 0 {
            break;
        }

        let unblocked = j == pos + consumed || tables.ccc(chars[j - 1]) < ccc;

        if unblocked {
            key[key_len] = c;

            if let Some(weights) = table.sequence(&key[.. key_len + 1]) {
                key_len += 1;
                found = Some(weights);
                chars.remove(j);
                continue;
            }
        }

        j += 1;
    }

    match found {
        Some(weights) => (consumed, CollationElement::from_slice(weights)),
        None => (1, single(tables, code)),
    }
}

/// веса одиночного кодпоинта: из таблицы или вычисленные
#[inline(always)]
fn single(tables: &CollationTables, code: u32) -> CollationElement<'_>
{
    match tables.weights().single(code) {
        Some(weights) => CollationElement::from_slice(weights),
        None => CollationElement::Implicit(tables.implicit().weights(code)),
    }
}
