use tracing::trace;

use super::weight_table::WeightTable;
use crate::error::{ParseErrorKind, TableError};
use crate::weights::{pack, MAX_SECONDARY, MAX_TERTIARY, SENTINEL};

pub const SOURCE_NAME: &str = "allkeys.txt";

/// максимальная длина последовательности кодпоинтов в записи
const MAX_SEQUENCE: usize = 3;

/// разобранный allkeys.txt
#[derive(Debug, Default)]
pub struct AllKeys
{
    /// @version
    pub version: Option<String>,
    /// веса; компактные таблицы ещё не заполнены
    pub weights: WeightTable,
    /// @implicitweights: начало, конец, базовый вес
    pub implicit: Vec<(u32, u32, u16)>,
}

/// разобрать таблицу весов в формате allkeys.txt (DUCET)
///
/// ```text
/// @version 15.1.0
/// @implicitweights 17000..18AFF; FB00 # Tangut and Tangut Components
/// 0020 ; [*0209.0020.0002] # SPACE
/// 004C 00B7 ; [.2138.0020.0008][.0000.010D.0002] # LATIN CAPITAL LETTER L WITH MIDDLE DOT
/// ```
pub fn parse(source: &str) -> Result<AllKeys, TableError>
{
    let mut result = AllKeys::default();
    let mut weights = vec![];

    for (index, line) in source.lines().enumerate() {
        let error = |kind: ParseErrorKind| TableError::parse(SOURCE_NAME, index + 1, kind);

        // комментарии
        let line = match line.split_once('#') {
            Some((data, _)) => data,
            None => line,
        }
        .trim();

        if line.is_empty() {
            continue;
        }

        // директивы
        if let Some(directive) = line.strip_prefix('@') {
            match directive.split_once(char::is_whitespace) {
                Some(("version", version)) => result.version = Some(version.trim().to_owned()),
                Some(("implicitweights", range)) => {
                    result.implicit.push(parse_implicit_range(range).map_err(error)?)
                }
                _ => trace!(line = index + 1, directive, "skipping unknown directive"),
            }

            continue;
        }

        let (codes, elements) = line
            .split_once(';')
            .ok_or(error(ParseErrorKind::MissingSeparator))?;

        let codes = parse_codes(codes).map_err(error)?;

        weights.clear();
        parse_elements(elements, &mut weights).map_err(error)?;

        result.weights.insert(&codes, &weights);
    }

    Ok(result)
}

/// кодпоинты записи: от 1 до 3
fn parse_codes(source: &str) -> Result<Vec<u32>, ParseErrorKind>
{
    let codes = source
        .split_whitespace()
        .map(parse_code)
        .collect::<Result<Vec<u32>, ParseErrorKind>>()?;

    match codes.len() {
        0 => Err(ParseErrorKind::InvalidCodepoint(source.trim().to_owned())),
        1 ..= MAX_SEQUENCE => Ok(codes),
        len => Err(ParseErrorKind::SequenceTooLong(len)),
    }
}

/// кодпоинт в шестнадцатеричной записи
pub(super) fn parse_code(source: &str) -> Result<u32, ParseErrorKind>
{
    match u32::from_str_radix(source, 16) {
        Ok(code) if code <= 0x10FFFF => Ok(code),
        _ => Err(ParseErrorKind::InvalidCodepoint(source.to_owned())),
    }
}

/// веса записи: [.PPPP.SSSS.TTTT][*PPPP.SSSS.TTTT]...
fn parse_elements(source: &str, result: &mut Vec<u32>) -> Result<(), ParseErrorKind>
{
    let mut rest = source.trim();

    while !rest.is_empty() {
        let malformed = || ParseErrorKind::MalformedElement(rest.to_owned());

        let end = rest.find(']').ok_or_else(malformed)?;
        let element = rest[.. end].strip_prefix('[').ok_or_else(malformed)?;

        result.push(parse_element(element).ok_or_else(malformed)??);

        rest = rest[end + 1 ..].trim_start();
    }

    match result.is_empty() {
        true => Err(ParseErrorKind::NoWeights),
        false => Ok(()),
    }
}

/// один элемент без скобок: .PPPP.SSSS.TTTT или *PPPP.SSSS.TTTT; дополнительные уровни игнорируются.
/// None - элемент не разбирается вообще
fn parse_element(element: &str) -> Option<Result<u32, ParseErrorKind>>
{
    let is_variable = match element.chars().next()? {
        '*' => true,
        '.' => false,
        _ => return None,
    };

    let mut fields = element[1 ..].split('.');
    let mut next = || u32::from_str_radix(fields.next()?, 16).ok();

    let (l1, l2, l3) = (next()?, next()?, next()?);

    for (level, value, max) in [
        ("primary", l1, u16::MAX),
        ("secondary", l2, MAX_SECONDARY),
        ("tertiary", l3, MAX_TERTIARY),
    ] {
        if value > max as u32 {
            return Some(Err(ParseErrorKind::WeightOutOfRange { level, value, max }));
        }
    }

    let packed = pack(l1 as u16, l2 as u16, l3 as u16, is_variable);

    Some(match packed == SENTINEL {
        true => Err(ParseErrorKind::ReservedWeight),
        false => Ok(packed),
    })
}

/// START..END; BASE
fn parse_implicit_range(source: &str) -> Result<(u32, u32, u16), ParseErrorKind>
{
    let (range, base) = source
        .split_once(';')
        .ok_or(ParseErrorKind::MalformedDirective)?;

    let (start, end) = range
        .trim()
        .split_once("..")
        .ok_or(ParseErrorKind::MalformedDirective)?;

    let start = parse_code(start.trim())?;
    let end = parse_code(end.trim())?;
    let base =
        u16::from_str_radix(base.trim(), 16).map_err(|_| ParseErrorKind::MalformedDirective)?;

    match start <= end {
        true => Ok((start, end, base)),
        false => Err(ParseErrorKind::MalformedDirective),
    }
}
