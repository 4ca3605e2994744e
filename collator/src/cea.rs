use crate::collation_element::collation_element;
use crate::tables::CollationTables;
use crate::weights::{self, SENTINEL};

/// массив весов (CEA) для кодпоинтов начиная с offset. буфер результата очищается, массив завершается SENTINEL.
///
/// при сдвиге переменных весов игнорируемые на первом уровне веса, следующие за переменным, обнуляются
pub fn generate(
    tables: &CollationTables,
    chars: &mut Vec<u32>,
    offset: usize,
    shifting: bool,
    result: &mut Vec<u32>,
)
{
    result.clear();

    let mut pos = offset;
    let mut following_a_variable = false;

    while pos < chars.len() {
        let (consumed, element) = collation_element(tables, chars, pos);

        for &w in element.weights() {
            result.push(match shifting {
                true => shift(w, &mut following_a_variable),
                false => w,
            });
        }

        pos += consumed;
    }

    result.push(SENTINEL);
}

/// TR10, 4.1 Variable Weighting: игнорируемые после переменного веса не учитываются ни на одном уровне
#[inline(always)]
fn shift(w: u32, following_a_variable: &mut bool) -> u32
{
    if weights::is_variable(w) {
        *following_a_variable = true;
        return w;
    }

    match weights::primary(w) {
        0 => match *following_a_variable {
            true => 0,
            false => w,
        },
        _ => {
            *following_a_variable = false;
            w
        }
    }
}
