use serde::{Deserialize, Serialize};

use crate::weights::pack;

// веса получаются следующим образом: [.AAAA.0020.0002][.BBBB.0000.0000]

/// основные иероглифы хань
const HAN_CORE_BASE: u16 = 0xFB40;
/// прочие иероглифы хань
const HAN_OTHER_BASE: u16 = 0xFB80;
/// любой другой кодпоинт
const UNASSIGNED_BASE: u16 = 0xFBC0;

/// диапазон кодпоинтов с собственным базовым весом (директива @implicitweights в allkeys.txt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplicitRange
{
    /// первый кодпоинт
    pub start: u32,
    /// последний кодпоинт (включительно)
    pub end: u32,
    /// вес AAAA
    pub base: u16,
    /// от какого кодпоинта отсчитывается BBBB: начало первого диапазона с тем же базовым весом
    pub origin: u32,
}

/// вычисляемые веса
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplicitWeights
{
    ranges: Vec<ImplicitRange>,
}

impl ImplicitWeights
{
    /// диапазоны из пар (начало ..= конец, базовый вес)
    pub fn new(ranges: &[(u32, u32, u16)]) -> Self
    {
        let ranges = ranges
            .iter()
            .map(|&(start, end, base)| ImplicitRange {
                start,
                end,
                base,
                origin: ranges
                    .iter()
                    .filter(|range| range.2 == base)
                    .map(|range| range.0)
                    .min()
                    .unwrap_or(start),
            })
            .collect();

        Self { ranges }
    }

    /// диапазоны с собственными базовыми весами
    pub fn ranges(&self) -> &[ImplicitRange]
    {
        &self.ranges
    }

    /// проверка диапазонов, восстановленных из снимка
    pub(crate) fn validate(&self) -> Result<(), &'static str>
    {
        let valid = self
            .ranges
            .iter()
            .all(|range| range.origin <= range.start && range.start <= range.end);

        match valid {
            true => Ok(()),
            false => Err("malformed implicit weight range"),
        }
    }

    /// рассчитать вычисляемые веса
    #[inline(never)]
    pub fn weights(&self, code: u32) -> [u32; 2]
    {
        // сначала проверим хань

        if is_han_core(code) {
            return implicit(HAN_CORE_BASE + (code >> 15) as u16, code & 0x7FFF);
        }

        if is_han_other(code) {
            return implicit(HAN_OTHER_BASE + (code >> 15) as u16, code & 0x7FFF);
        }

        // тангутское письмо, нюй-шу, киданьская письменность и т.д.

        if let Some(range) = self
            .ranges
            .iter()
            .find(|range| (range.start ..= range.end).contains(&code))
        {
            return implicit(range.base, code - range.origin);
        }

        // любой другой кодпоинт
        implicit(UNASSIGNED_BASE + (code >> 15) as u16, code & 0x7FFF)
    }
}

impl Default for ImplicitWeights
{
    /// диапазоны Unicode 15.1
    fn default() -> Self
    {
        Self::new(&[
            // Tangut, Tangut Components
            (0x17000, 0x187F7, 0xFB00),
            (0x18800, 0x18AFF, 0xFB00),
            // Tangut Supplement
            (0x18D00, 0x18D08, 0xFB00),
            // Nushu
            (0x1B170, 0x1B2FB, 0xFB01),
            // Khitan Small Script
            (0x18B00, 0x18CD5, 0xFB02),
        ])
    }
}

#[inline(always)]
fn implicit(aaaa: u16, bbbb: u32) -> [u32; 2]
{
    [
        pack(aaaa, 0x20, 0x02, false),
        pack((bbbb | 0x8000) as u16, 0, 0, false),
    ]
}

/// Основные иероглифы унификации Хань
/// https://en.wikipedia.org/wiki/CJK_Unified_Ideographs
///
/// Базовый блок иероглифов унификации Хань
///     U+4E00 ..= U+9FFF
///
/// Находятся в блоке совместимости (12 иероглифов):
///     U+FA0E, U+FA0F, U+FA11, U+FA13, U+FA14, U+FA1F, U+FA21, U+FA23, U+FA24, U+FA27, U+FA28, U+FA29
///
/// TR10: Unified_Ideograph=True AND ((Block=CJK_Unified_Ideograph) OR (Block=CJK_Compatibility_Ideographs))
pub fn is_han_core(code: u32) -> bool
{
    (0x4E00 ..= 0x9FFF).contains(&code)
        || matches!(
            code,
            0xFA0E | 0xFA0F | 0xFA11 | 0xFA13 | 0xFA14 | 0xFA1F | 0xFA21 | 0xFA23 | 0xFA24 | 0xFA27
                | 0xFA28 | 0xFA29
        )
}

/// Иероглифы унификации Хань (прочие)
///
/// ```text
///     U+3400 ..= U+4DBF
///     U+20000 ..= U+2A6DF
///     U+2A700 ..= U+2B739
///     U+2B740 ..= U+2B81D
///     U+2B820 ..= U+2CEA1
///     U+2CEB0 ..= U+2EBE0
///     U+2EBF0 ..= U+2EE5D
///     U+30000 ..= U+3134A
///     U+31350 ..= U+323AF
/// ```
///
/// TR10: Unified_Ideograph=True AND NOT ((Block=CJK_Unified_Ideograph) OR (Block=CJK_Compatibility_Ideographs))
pub fn is_han_other(code: u32) -> bool
{
    [
        (0x3400 ..= 0x4DBF),
        (0x20000 ..= 0x2A6DF),
        (0x2A700 ..= 0x2B739),
        (0x2B740 ..= 0x2B81D),
        (0x2B820 ..= 0x2CEA1),
        (0x2CEB0 ..= 0x2EBE0),
        (0x2EBF0 ..= 0x2EE5D),
        (0x30000 ..= 0x3134A),
        (0x31350 ..= 0x323AF),
    ]
    .iter()
    .any(|range| range.contains(&code))
}
