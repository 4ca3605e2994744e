use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::weights::{self, SENTINEL};

/// кодпоинты ниже этого значения получают веса из компактной таблицы (один набор весов на кодпоинт)
pub const LOW_LIMIT: u32 = 0xB7;
/// ASCII
pub const ASCII_LIMIT: u32 = 0x80;

/// в ключе последовательности из двух кодпоинтов - вместо третьего
const NO_CODE: u64 = 0x1F_FFFF;

/// запись весов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry
{
    /// одинарные веса
    Single(u32),
    /// расширение: позиция и количество весов в общем массиве
    Expansion(u32, u8),
}

/// таблица весов: кодпоинты и последовательности из 2-3 кодпоинтов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightTable
{
    /// веса кодпоинтов до U+00B7; SENTINEL - кодпоинт обрабатывается общим путём
    low: Vec<u32>,
    /// веса ASCII-символов для быстрого сравнения; 0 - символ не подходит
    ascii: Vec<u32>,
    /// одиночные кодпоинты
    singles: HashMap<u32, Entry>,
    /// последовательности (сокращения, many-to-many)
    sequences: HashMap<u64, Entry>,
    /// кодпоинты, с которых начинаются последовательности
    starters: HashSet<u32>,
    /// веса расширений
    pub(super) expansions: Vec<u32>,
}

impl WeightTable
{
    /// добавить запись
    pub(crate) fn insert(&mut self, codes: &[u32], weights: &[u32])
    {
        let entry = match weights {
            [single] => Entry::Single(*single),
            _ => {
                let pos = self.expansions.len() as u32;
                self.expansions.extend_from_slice(weights);

                Entry::Expansion(pos, weights.len() as u8)
            }
        };

        let replaced = match codes {
            [code] => self.singles.insert(*code, entry),
            _ => {
                self.starters.insert(codes[0]);
                self.sequences.insert(sequence_key(codes), entry)
            }
        };

        if replaced.is_some() {
            warn!(?codes, "duplicate weight entry, keeping the last one");
        }
    }

    /// заполнить компактные таблицы после загрузки всех записей
    pub(crate) fn finish(&mut self)
    {
        self.low = (0 .. LOW_LIMIT)
            .map(|code| match self.singles.get(&code) {
                Some(Entry::Single(w)) if !self.starters.contains(&code) => *w,
                _ => SENTINEL,
            })
            .collect();

        self.ascii = self.low[.. ASCII_LIMIT as usize]
            .iter()
            .map(|&w| {
                let simple = w != SENTINEL
                    && !weights::is_variable(w)
                    && weights::primary(w) != 0
                    && weights::secondary(w) != 0
                    && weights::tertiary(w) != 0;

                match simple {
                    true => w,
                    false => 0,
                }
            })
            .collect();
    }

    /// количество записей: одиночные кодпоинты, последовательности
    pub fn counts(&self) -> (usize, usize)
    {
        (self.singles.len(), self.sequences.len())
    }

    /// таблица пуста?
    pub fn is_empty(&self) -> bool
    {
        self.singles.is_empty() && self.sequences.is_empty()
    }

    /// проверка таблицы, восстановленной из снимка: компактные таблицы заполнены,
    /// записи расширений не выходят за общий массив весов
    pub(crate) fn validate(&self) -> Result<(), &'static str>
    {
        if self.low.len() != LOW_LIMIT as usize || self.ascii.len() != ASCII_LIMIT as usize {
            return Err("compact weight tables have a wrong length");
        }

        let in_pool = |entry: &Entry| match *entry {
            Entry::Single(_) => true,
            Entry::Expansion(pos, len) => {
                len != 0 && pos as usize + len as usize <= self.expansions.len()
            }
        };

        match self.singles.values().chain(self.sequences.values()).all(in_pool) {
            true => Ok(()),
            false => Err("weight entry points outside the expansion pool"),
        }
    }

    /// веса из компактной таблицы
    #[inline(always)]
    pub fn low(&self, code: u32) -> Option<u32>
    {
        match self.low.get(code as usize) {
            Some(&w) if w != SENTINEL => Some(w),
            _ => None,
        }
    }

    /// ASCII-символ с одинарными непеременными весами, ненулевыми на всех трёх уровнях
    #[inline(always)]
    pub fn ascii(&self, code: u32) -> Option<u32>
    {
        match self.ascii.get(code as usize) {
            Some(&w) if w != 0 => Some(w),
            _ => None,
        }
    }

    /// веса одиночного кодпоинта
    #[inline(always)]
    pub fn single(&self, code: u32) -> Option<&[u32]>
    {
        self.singles.get(&code).map(|entry| self.entry_weights(entry))
    }

    /// первый набор весов кодпоинта, если он есть в таблице
    #[inline]
    pub fn first(&self, code: u32) -> Option<u32>
    {
        match self.low(code) {
            Some(w) => Some(w),
            None => self.single(code).map(|w| w[0]),
        }
    }

    /// кодпоинт начинает последовательность?
    #[inline(always)]
    pub fn is_starter(&self, code: u32) -> bool
    {
        self.starters.contains(&code)
    }

    /// у кодпоинта есть собственная запись?
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.singles.contains_key(&code)
    }

    /// веса последовательности из 2 или 3 кодпоинтов
    #[inline(always)]
    pub fn sequence(&self, codes: &[u32]) -> Option<&[u32]>
    {
        self.sequences
            .get(&sequence_key(codes))
            .map(|entry| self.entry_weights(entry))
    }

    #[inline(always)]
    fn entry_weights<'a>(&'a self, entry: &'a Entry) -> &'a [u32]
    {
        match entry {
            Entry::Single(w) => core::slice::from_ref(w),
            Entry::Expansion(pos, len) => {
                &self.expansions[*pos as usize .. *pos as usize + *len as usize]
            }
        }
    }
}

/// ключ последовательности: 2-3 кодпоинта по 21 биту в u64
#[inline(always)]
pub fn sequence_key(codes: &[u32]) -> u64
{
    let third = match codes.get(2) {
        Some(&code) => code as u64,
        None => NO_CODE,
    };

    ((codes[0] as u64) << 42) | ((codes[1] as u64) << 21) | third
}
