use hashbrown::HashMap;

use super::allkeys::parse_code;
use crate::error::{ParseErrorKind, TableError};
use crate::normalize::reorder_by;

pub const SOURCE_NAME: &str = "UnicodeData.txt";

/// максимальная длина полной канонической декомпозиции
pub const MAX_DECOMPOSITION: usize = 4;

/// наибольшая вложенность декомпозиций; в данных Unicode - не больше 2
const MAX_DEPTH: usize = 4;

/// нужные нам свойства из UnicodeData.txt
#[derive(Debug, Default)]
pub struct UnicodeData
{
    /// ненулевые классы канонического комбинирования
    pub classes: HashMap<u32, u8>,
    /// полные канонические декомпозиции, уже упорядоченные
    pub decompositions: HashMap<u32, Vec<u32>>,
}

/// разобрать UnicodeData.txt: CCC (колонка 3) и каноническая декомпозиция (колонка 5).
/// декомпозиции совместимости (с тегом) пропускаются
pub fn parse(source: &str) -> Result<UnicodeData, TableError>
{
    let mut classes = HashMap::new();
    // кодпоинт -> (номер строки, декомпозиция из файла)
    let mut raw: HashMap<u32, (usize, Vec<u32>)> = HashMap::new();
    let mut lines = 0;

    for (index, line) in source.lines().enumerate() {
        let error = |kind: ParseErrorKind| TableError::parse(SOURCE_NAME, index + 1, kind);

        if line.trim().is_empty() {
            continue;
        }

        lines += 1;

        let props: Vec<&str> = line.split(';').collect();

        if props.len() < 6 {
            return Err(error(ParseErrorKind::MissingSeparator));
        }

        let code = parse_code(props[0]).map_err(error)?;

        // диапазоны (<CJK Ideograph, First> .. <CJK Ideograph, Last>, слоги хангыль и т.п.) не имеют
        // ни CCC, ни декомпозиций в этом файле
        if props[1].ends_with(", First>") || props[1].ends_with(", Last>") {
            continue;
        }

        let ccc: u8 = props[3]
            .parse()
            .map_err(|_| error(ParseErrorKind::InvalidCombiningClass(props[3].to_owned())))?;

        if ccc != 0 {
            classes.insert(code, ccc);
        }

        let decomposition = props[5].trim();

        if decomposition.is_empty() || decomposition.starts_with('<') {
            continue;
        }

        let codes = decomposition
            .split_whitespace()
            .map(parse_code)
            .collect::<Result<Vec<u32>, ParseErrorKind>>()
            .map_err(error)?;

        raw.insert(code, (index + 1, codes));
    }

    if lines == 0 {
        return Err(TableError::Empty(SOURCE_NAME));
    }

    let ccc = |code: u32| classes.get(&code).copied().unwrap_or(0);

    let mut decompositions = HashMap::with_capacity(raw.len());

    for (&code, (line, _)) in raw.iter() {
        let error = |kind: ParseErrorKind| TableError::parse(SOURCE_NAME, *line, kind);

        let mut expansion = vec![];
        expand(code, &raw, &mut expansion, 0).map_err(error)?;

        if expansion.len() > MAX_DECOMPOSITION {
            return Err(error(ParseErrorKind::DecompositionTooLong(expansion.len())));
        }

        reorder_by(&mut expansion, ccc);
        decompositions.insert(code, expansion);
    }

    Ok(UnicodeData {
        classes,
        decompositions,
    })
}

/// рекурсивно раскрыть декомпозицию
fn expand(
    code: u32,
    raw: &HashMap<u32, (usize, Vec<u32>)>,
    result: &mut Vec<u32>,
    depth: usize,
) -> Result<(), ParseErrorKind>
{
    if depth > MAX_DEPTH {
        return Err(ParseErrorKind::CyclicDecomposition);
    }

    match raw.get(&code) {
        Some((_, codes)) => {
            for &code in codes {
                expand(code, raw, result, depth + 1)?;
            }
        }
        None => result.push(code),
    }

    Ok(())
}
