use core::cmp::Ordering;

use tracing::trace;

pub use error::{ParseErrorKind, TableError};
pub use key::SortKey;
pub use options::{AlternateHandling, CaseFirst, CollatorOptions, Strength};
pub use tables::CollationTables;
pub use weights::Weights;

pub mod ascii;
pub mod cea;
pub mod collation_element;
pub mod compare;
pub mod error;
pub mod hangul;
pub mod implicit;
pub mod key;
pub mod normalize;
pub mod options;
pub mod prefix;
pub mod tables;
pub mod utf8;
pub mod weights;

/// результат сравнения и этап, на котором он был получен
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison
{
    pub ordering: Ordering,
    pub resolution: Resolution,
}

/// этап, на котором было принято решение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution
{
    /// байты строк совпадают
    Identical,
    /// быстрое сравнение ASCII
    AsciiFastPath,
    /// одна строка - общий префикс другой, решили веса оставшейся части
    PrefixLength,
    /// отличие на уровне
    Level(Strength),
    /// равны на всех уровнях, сравнены исходные байты
    Tiebreak,
    /// равны
    Equal,
}

/// коллатор: сравнивает строки по UCA. таблицы общие и неизменяемые, буферы - собственные,
/// поэтому один коллатор - на один поток
pub struct Collator<'a>
{
    tables: &'a CollationTables,
    options: CollatorOptions,
    /// кодпоинты первой строки
    a_chars: Vec<u32>,
    /// кодпоинты второй строки
    b_chars: Vec<u32>,
    /// веса первой строки
    a_cea: Vec<u32>,
    /// веса второй строки
    b_cea: Vec<u32>,
}

impl<'a> Collator<'a>
{
    pub fn new(tables: &'a CollationTables, options: CollatorOptions) -> Self
    {
        Self {
            tables,
            options,
            a_chars: Vec::with_capacity(64),
            b_chars: Vec::with_capacity(64),
            a_cea: Vec::with_capacity(64),
            b_cea: Vec::with_capacity(64),
        }
    }

    /// опции
    pub fn options(&self) -> &CollatorOptions
    {
        &self.options
    }

    /// таблицы
    pub fn tables(&self) -> &'a CollationTables
    {
        self.tables
    }

    /// сравнить строки UTF-8
    #[inline]
    pub fn collate(&mut self, a: &str, b: &str) -> Ordering
    {
        self.compare(a.as_bytes(), b.as_bytes())
    }

    /// сравнить последовательности байт; некорректный UTF-8 не является ошибкой
    #[inline]
    pub fn compare(&mut self, a: &[u8], b: &[u8]) -> Ordering
    {
        self.compare_detailed(a, b).ordering
    }

    /// сравнить и узнать, на каком этапе было принято решение
    pub fn compare_detailed(&mut self, a: &[u8], b: &[u8]) -> Comparison
    {
        let result = self.resolve(a, b);

        trace!(ordering = ?result.ordering, resolution = ?result.resolution, "compared");

        result
    }

    fn resolve(&mut self, a: &[u8], b: &[u8]) -> Comparison
    {
        if a == b {
            return Comparison::new(Ordering::Equal, Resolution::Identical);
        }

        let tables = self.tables;
        let shifting = self.options.is_shifted();

        utf8::decode_into(a, &mut self.a_chars);
        utf8::decode_into(b, &mut self.b_chars);

        if let Some(ordering) = ascii::try_ascii(tables, &self.a_chars, &self.b_chars, &self.options)
        {
            return Comparison::new(ordering, Resolution::AsciiFastPath);
        }

        normalize::normalize(tables, &mut self.a_chars);
        normalize::normalize(tables, &mut self.b_chars);

        let offset = prefix::shared_prefix(tables, &self.a_chars, &self.b_chars, shifting);

        // одна из строк закончилась в общем префиксе
        let prefix_ended = offset == self.a_chars.len() || offset == self.b_chars.len();

        if prefix_ended && self.a_chars.len() == self.b_chars.len() {
            return self.tiebreak(a, b);
        }

        // хвост длинной строки может не иметь весов на сравниваемых уровнях (переменные веса при сдвиге,
        // игнорируемые символы): решают веса хвоста, а не длина
        cea::generate(tables, &mut self.a_chars, offset, shifting, &mut self.a_cea);
        cea::generate(tables, &mut self.b_chars, offset, shifting, &mut self.b_cea);

        match compare::compare_levels(&self.a_cea, &self.b_cea, &self.options) {
            Some((_, ordering)) if prefix_ended => {
                Comparison::new(ordering, Resolution::PrefixLength)
            }
            Some((level, ordering)) => Comparison::new(ordering, Resolution::Level(level)),
            None => self.tiebreak(a, b),
        }
    }

    /// строки равны на всех уровнях
    #[inline(always)]
    fn tiebreak(&self, a: &[u8], b: &[u8]) -> Comparison
    {
        match self.options.tiebreak {
            true => Comparison::new(a.cmp(b), Resolution::Tiebreak),
            false => Comparison::new(Ordering::Equal, Resolution::Equal),
        }
    }

    /// ключ сопоставления
    pub fn sort_key(&mut self, input: &[u8]) -> SortKey
    {
        let options = self.options;
        let cea = self.collation_elements(input);

        SortKey::new(cea, &options)
    }

    /// массив весов строки (без завершающего элемента)
    pub fn collation_elements(&mut self, input: &[u8]) -> &[u32]
    {
        let tables = self.tables;

        utf8::decode_into(input, &mut self.a_chars);
        normalize::normalize(tables, &mut self.a_chars);
        cea::generate(
            tables,
            &mut self.a_chars,
            0,
            self.options.is_shifted(),
            &mut self.a_cea,
        );

        &self.a_cea[.. self.a_cea.len() - 1]
    }

    /// отсортировать
    pub fn sort<T: AsRef<[u8]>>(&mut self, items: &mut [T])
    {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

impl Comparison
{
    #[inline(always)]
    fn new(ordering: Ordering, resolution: Resolution) -> Self
    {
        Self {
            ordering,
            resolution,
        }
    }
}
