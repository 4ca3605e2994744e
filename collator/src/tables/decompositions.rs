use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::weight_table::WeightTable;
use crate::hangul;

/// FCD-значение кодпоинта, который нельзя передать на сопоставление без декомпозиции:
/// у него нет собственных весов
pub const FCD_FORCE: u16 = u16::MAX;

/// классы канонического комбинирования
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombiningClassTable
{
    classes: HashMap<u32, u8>,
    /// первый кодпоинт с ненулевым CCC
    first_nonstarter: u32,
}

impl CombiningClassTable
{
    pub fn new(classes: HashMap<u32, u8>) -> Self
    {
        let first_nonstarter = classes.keys().copied().min().unwrap_or(u32::MAX);

        Self {
            classes,
            first_nonstarter,
        }
    }

    /// класс канонического комбинирования кодпоинта
    #[inline(always)]
    pub fn get(&self, code: u32) -> u8
    {
        match code < self.first_nonstarter {
            true => 0,
            false => self.classes.get(&code).copied().unwrap_or(0),
        }
    }

    /// первый кодпоинт с ненулевым CCC
    pub fn first_nonstarter(&self) -> u32
    {
        self.first_nonstarter
    }

    pub fn len(&self) -> usize
    {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.classes.is_empty()
    }
}

/// полные канонические декомпозиции и данные для быстрой проверки FCD
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecompositionTable
{
    /// кодпоинт -> позиция и длина декомпозиции в codes
    entries: HashMap<u32, (u32, u8)>,
    pub(super) codes: Vec<u32>,
    /// CCC первого (старший байт) и последнего (младший байт) кодпоинтов декомпозиции, или FCD_FORCE
    fcd: HashMap<u32, u16>,
    /// первый кодпоинт, имеющий декомпозицию (с учётом слогов хангыль)
    first_decomposing: u32,
}

impl DecompositionTable
{
    /// декомпозиции должны быть уже раскрыты и упорядочены
    pub fn new(
        decompositions: &HashMap<u32, Vec<u32>>,
        classes: &CombiningClassTable,
        weights: &WeightTable,
    ) -> Self
    {
        let mut table = Self {
            first_decomposing: hangul::S_BASE,
            ..Default::default()
        };

        for (&code, decomposition) in decompositions.iter() {
            let (Some(&first), Some(&last)) = (decomposition.first(), decomposition.last())
            else {
                continue;
            };

            table.entries.insert(
                code,
                (table.codes.len() as u32, decomposition.len() as u8),
            );
            table.codes.extend_from_slice(decomposition);

            let fcd = match weights.contains(code) {
                true => (classes.get(first) as u16) << 8 | classes.get(last) as u16,
                false => FCD_FORCE,
            };

            table.fcd.insert(code, fcd);
            table.first_decomposing = table.first_decomposing.min(code);
        }

        table
    }

    /// полная каноническая декомпозиция
    #[inline]
    pub fn get(&self, code: u32) -> Option<&[u32]>
    {
        if code < self.first_decomposing {
            return None;
        }

        self.entries
            .get(&code)
            .map(|&(pos, len)| &self.codes[pos as usize .. pos as usize + len as usize])
    }

    /// FCD-значение декомпозируемого кодпоинта: CCC первого и последнего кодпоинтов декомпозиции
    #[inline(always)]
    pub fn fcd(&self, code: u32) -> Option<u16>
    {
        self.fcd.get(&code).copied()
    }

    /// проверка таблицы, восстановленной из снимка
    pub(crate) fn validate(&self) -> Result<(), &'static str>
    {
        let valid = self.entries.values().all(|&(pos, len)| {
            len != 0 && pos as usize + len as usize <= self.codes.len()
        });

        match valid {
            true => Ok(()),
            false => Err("decomposition points outside the code point pool"),
        }
    }

    /// первый кодпоинт, имеющий декомпозицию
    pub fn first_decomposing(&self) -> u32
    {
        self.first_decomposing
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}
