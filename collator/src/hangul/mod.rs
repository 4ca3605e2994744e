// слоги хангыль не перечислены в UnicodeData.txt - их декомпозиция вычисляется.
// веса получают уже чамо, из таблицы весов

/// начало блока слогов хангыль
pub const S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
const S_COUNT: u32 = 11172;
/// начало блока ведущих согласных чамо
const L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
const V_BASE: u32 = 0x1161;
/// начало блока завершающих согласных (T_BASE + 0 - нет завершающей согласной)
const T_BASE: u32 = 0x11A7;
/// количество гласных * количество завершающих согласных
const N_COUNT: u32 = 588;
/// количество завершающих согласных
const T_COUNT: u32 = 27;
/// количество кодпоинтов на блок LV
const T_BLOCK_SIZE: u32 = T_COUNT + 1;

/// слог хангыль?
#[inline(always)]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(S_BASE) < S_COUNT
}

/// декомпозиция слога хангыль: чамо L, V и (если есть) T
#[inline(always)]
pub fn decompose(code: u32) -> ([u32; 3], usize)
{
    let lvt = code.wrapping_sub(S_BASE);

    let l = L_BASE + lvt / N_COUNT;
    let v = V_BASE + (lvt % N_COUNT) / T_BLOCK_SIZE;
    let t = lvt % T_BLOCK_SIZE;

    match t {
        0 => ([l, v, 0], 2),
        _ => ([l, v, T_BASE + t], 3),
    }
}
