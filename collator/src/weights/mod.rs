use core::fmt::Debug;

// упаковка весов в u32:
// 1111 1111  1111 1111    2222 2222  2333 333v
//
// L1 - 16 бит, L2 - 9 бит, L3 - 6 бит, v - маркер переменного веса

/// завершающий элемент массива весов; не может совпасть с допустимыми весами - загрузчик таблиц
/// отклоняет записи, которые упаковываются в это значение
pub const SENTINEL: u32 = u32::MAX;

/// максимальное значение веса второго уровня
pub const MAX_SECONDARY: u16 = 0x1FF;
/// максимальное значение веса третьего уровня
pub const MAX_TERTIARY: u16 = 0x3F;

/// маркер переменного веса
const VARIABLE_FLAG: u32 = 1 << 31;

/// упаковать веса
#[inline(always)]
pub const fn pack(l1: u16, l2: u16, l3: u16, is_variable: bool) -> u32
{
    (l1 as u32)
        | ((l2 as u32 & MAX_SECONDARY as u32) << 16)
        | ((l3 as u32 & MAX_TERTIARY as u32) << 25)
        | ((is_variable as u32) << 31)
}

/// вес первого уровня (базовые символы)
#[inline(always)]
pub const fn primary(weights: u32) -> u16
{
    weights as u16
}

/// вес второго уровня (диакритические знаки)
#[inline(always)]
pub const fn secondary(weights: u32) -> u16
{
    (weights >> 16) as u16 & MAX_SECONDARY
}

/// вес третьего уровня (регистр, варианты написания)
#[inline(always)]
pub const fn tertiary(weights: u32) -> u16
{
    (weights >> 25) as u16 & MAX_TERTIARY
}

/// переменный вес (пробелы, пунктуация)?
#[inline(always)]
pub const fn is_variable(weights: u32) -> bool
{
    weights & VARIABLE_FLAG != 0
}

/// веса для кодпоинта, 3 уровня
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weights
{
    pub l1: u16,
    pub l2: u16,
    pub l3: u16,
    pub is_variable: bool,
}

impl Weights
{
    /// в виде, в котором веса представлены в allkeys
    pub fn format(&self) -> String
    {
        let is_variable = match self.is_variable {
            true => '*',
            false => '.',
        };

        format!(
            "[{}{:04X}.{:04X}.{:04X}]",
            is_variable, self.l1, self.l2, self.l3,
        )
    }

    /// упакованное значение
    #[inline]
    pub fn pack(&self) -> u32
    {
        pack(self.l1, self.l2, self.l3, self.is_variable)
    }
}

impl From<u32> for Weights
{
    fn from(value: u32) -> Self
    {
        Self {
            l1: primary(value),
            l2: secondary(value),
            l3: tertiary(value),
            is_variable: is_variable(value),
        }
    }
}

impl Debug for Weights
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.format().as_str())
    }
}
