use crate::tables::CollationTables;
use crate::weights;

/// длина общего префикса двух нормализованных последовательностей, который можно не сопоставлять.
///
/// префикс не включает кодпоинты, с которых начинаются последовательности в таблице весов (сокращения
/// и т.п.). при сдвиге переменных весов префикс не может заканчиваться переменным весом: игнорируемые
/// после него веса зависят от него
pub fn shared_prefix(tables: &CollationTables, a: &[u32], b: &[u32], shifting: bool) -> usize
{
    let table = tables.weights();

    let mut offset = a
        .iter()
        .zip(b)
        .take_while(|(a, b)| a == b && !table.is_starter(**a))
        .count();

    if !shifting || offset == 0 {
        return offset;
    }

    // пропускаем игнорируемые на первом уровне кодпоинты в конце префикса
    let mut end = offset;

    while end > 0 && is_primary_ignorable(tables, a[end - 1]) {
        end -= 1;
    }

    if end > 0 && is_variable(tables, a[end - 1]) {
        offset = end - 1;

        // два переменных веса подряд - проще начать сначала
        if offset > 0 && is_variable(tables, a[offset - 1]) {
            return 0;
        }
    }

    offset
}

#[inline]
fn is_variable(tables: &CollationTables, code: u32) -> bool
{
    matches!(tables.weights().first(code), Some(w) if weights::is_variable(w))
}

#[inline]
fn is_primary_ignorable(tables: &CollationTables, code: u32) -> bool
{
    matches!(
        tables.weights().first(code),
        Some(w) if weights::primary(w) == 0 && !weights::is_variable(w)
    )
}
