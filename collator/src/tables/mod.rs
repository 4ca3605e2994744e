use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TableError;
use crate::implicit::ImplicitWeights;

pub use decompositions::{CombiningClassTable, DecompositionTable, FCD_FORCE};
pub use weight_table::{sequence_key, Entry, WeightTable, ASCII_LIMIT, LOW_LIMIT};

mod allkeys;
mod decompositions;
mod ucd;
mod weight_table;

/// все данные, нужные коллатору. загружаются один раз, после загрузки не изменяются
/// и могут использоваться несколькими коллаторами (в т.ч. из разных потоков)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollationTables
{
    /// версия данных (@version в allkeys.txt)
    version: Option<String>,
    /// веса
    weights: WeightTable,
    /// канонические декомпозиции
    decompositions: DecompositionTable,
    /// классы канонического комбинирования
    classes: CombiningClassTable,
    /// вычисляемые веса
    implicit: ImplicitWeights,
    /// кодпоинты ниже этого значения не декомпозируются и имеют CCC = 0
    fcd_threshold: u32,
}

impl CollationTables
{
    /// таблицы из текстов allkeys.txt и UnicodeData.txt
    pub fn from_sources(allkeys: &str, unicode_data: &str) -> Result<Self, TableError>
    {
        let unicode = ucd::parse(unicode_data)?;
        let keys = allkeys::parse(allkeys)?;

        if keys.weights.is_empty() {
            return Err(TableError::Empty(allkeys::SOURCE_NAME));
        }

        let mut weights = keys.weights;
        weights.finish();

        let classes = CombiningClassTable::new(unicode.classes);
        let decompositions = DecompositionTable::new(&unicode.decompositions, &classes, &weights);

        let implicit = match keys.implicit.is_empty() {
            true => ImplicitWeights::default(),
            false => ImplicitWeights::new(&keys.implicit),
        };

        let tables = Self {
            version: keys.version,
            fcd_threshold: decompositions
                .first_decomposing()
                .min(classes.first_nonstarter()),
            weights,
            decompositions,
            classes,
            implicit,
        };

        tables.log_loaded("collation tables loaded");

        Ok(tables)
    }

    /// таблицы из файлов allkeys.txt и UnicodeData.txt
    pub fn from_files(
        allkeys: impl AsRef<Path>,
        unicode_data: impl AsRef<Path>,
    ) -> Result<Self, TableError>
    {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| TableError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        Self::from_sources(&read(allkeys.as_ref())?, &read(unicode_data.as_ref())?)
    }

    /// сериализовать загруженные таблицы
    pub fn bake(&self) -> Result<Vec<u8>, TableError>
    {
        bincode::serialize(self).map_err(TableError::Encode)
    }

    /// восстановить таблицы, сериализованные bake(). снимок проверяется целиком: ссылки внутри таблиц
    /// не должны выходить за их пределы
    pub fn from_baked(bytes: &[u8]) -> Result<Self, TableError>
    {
        let tables: Self = bincode::deserialize(bytes).map_err(TableError::Decode)?;

        if tables.weights.is_empty() {
            return Err(TableError::Empty("baked tables"));
        }

        tables
            .weights
            .validate()
            .and(tables.decompositions.validate())
            .and(tables.implicit.validate())
            .map_err(TableError::Inconsistent)?;

        tables.log_loaded("collation tables unbaked");

        Ok(tables)
    }

    fn log_loaded(&self, message: &'static str)
    {
        let (singles, sequences) = self.weights.counts();

        debug!(
            version = self.version.as_deref().unwrap_or("unknown"),
            singles,
            sequences,
            decompositions = self.decompositions.len(),
            nonstarters = self.classes.len(),
            implicit_ranges = self.implicit.ranges().len(),
            "{message}"
        );
    }

    /// версия данных
    pub fn version(&self) -> Option<&str>
    {
        self.version.as_deref()
    }

    /// таблица весов
    #[inline(always)]
    pub fn weights(&self) -> &WeightTable
    {
        &self.weights
    }

    /// таблица декомпозиций
    #[inline(always)]
    pub fn decompositions(&self) -> &DecompositionTable
    {
        &self.decompositions
    }

    /// вычисляемые веса
    #[inline(always)]
    pub fn implicit(&self) -> &ImplicitWeights
    {
        &self.implicit
    }

    /// класс канонического комбинирования
    #[inline(always)]
    pub fn ccc(&self, code: u32) -> u8
    {
        self.classes.get(code)
    }

    /// полная каноническая декомпозиция
    #[inline(always)]
    pub fn decomposition(&self, code: u32) -> Option<&[u32]>
    {
        self.decompositions.get(code)
    }

    /// кодпоинты ниже этого значения не декомпозируются и не переупорядочиваются
    #[inline(always)]
    pub fn fcd_threshold(&self) -> u32
    {
        self.fcd_threshold
    }
}
