// все опции - см. UTS #10, https://www.unicode.org/reports/tr10/ и UTS #35,
// https://www.unicode.org/reports/tr35/tr35-collation.html

use serde::{Deserialize, Serialize};

/// уровень сравнения
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength
{
    Primary = 1,    // базовые символы
    Secondary = 2,  // диакритические знаки
    Tertiary = 3,   // регистр / варианты
    Quaternary = 4, // пунктуация
}

impl Strength
{
    /// все уровни по порядку сравнения
    pub const LEVELS: [Strength; 4] = [
        Strength::Primary,
        Strength::Secondary,
        Strength::Tertiary,
        Strength::Quaternary,
    ];
}

/// тип сравнения переменных весов
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlternateHandling
{
    NonIgnorable = 0, // переменные веса не игнорируются
    Shifted = 1,      // со сдвигом переменных весов на 4й уровень
}

/// порядок регистров на третьем уровне
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseFirst
{
    Lower = 0, // строчные буквы первыми (как в DUCET)
    Upper = 1, // прописные буквы первыми
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CollatorOptions
{
    /// уровень сравнения
    pub strength: Strength,
    /// тип сравнения переменных весов
    pub alternate: AlternateHandling,
    /// порядок регистров
    pub case_first: CaseFirst,
    /// при равенстве по всем уровням - сравнить исходные байты
    pub tiebreak: bool,
}

impl CollatorOptions
{
    /// переменные веса сдвигаются на 4й уровень?
    #[inline(always)]
    pub fn is_shifted(&self) -> bool
    {
        self.alternate == AlternateHandling::Shifted
    }

    /// уровень участвует в сравнении? 4й уровень существует только при сдвиге переменных весов
    #[inline(always)]
    pub fn compares(&self, level: Strength) -> bool
    {
        level <= self.strength && (level != Strength::Quaternary || self.is_shifted())
    }
}

impl Default for Strength
{
    fn default() -> Self
    {
        Self::Quaternary
    }
}

impl Default for AlternateHandling
{
    fn default() -> Self
    {
        Self::Shifted
    }
}

impl Default for CaseFirst
{
    fn default() -> Self
    {
        Self::Lower
    }
}

impl Default for CollatorOptions
{
    fn default() -> Self
    {
        Self {
            strength: Default::default(),
            alternate: Default::default(),
            case_first: Default::default(),
            tiebreak: true,
        }
    }
}
