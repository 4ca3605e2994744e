use core::fmt::{Display, Formatter};

use crate::compare::level_value;
use crate::options::{CollatorOptions, Strength};
use crate::weights::SENTINEL;

/// ключ сопоставления: ненулевые веса уровней, уровни разделены 0000.
/// ключи сравниваются обычным лексикографическим порядком
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(Vec<u16>);

impl SortKey
{
    /// составить ключ из массива весов
    pub fn new(cea: &[u32], options: &CollatorOptions) -> Self
    {
        let mut key = vec![];

        for level in Strength::LEVELS {
            if !options.compares(level) {
                break;
            }

            if level != Strength::Primary {
                key.push(0);
            }

            key.extend(
                cea.iter()
                    .take_while(|&&w| w != SENTINEL)
                    .map(|&w| level_value(w, level, options))
                    .filter(|&value| value != 0),
            );
        }

        Self(key)
    }

    /// веса ключа
    pub fn weights(&self) -> &[u16]
    {
        &self.0
    }

    /// веса по уровням
    pub fn levels(&self) -> impl Iterator<Item = &[u16]>
    {
        self.0.split(|&w| w == 0)
    }
}

impl Display for SortKey
{
    /// как в CollationTest: [2075 2154 | 0020 0020 | 0002 0002 | FFFF FFFF]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        let mut tokens = vec![];

        for (i, level) in self.levels().enumerate() {
            if i != 0 {
                tokens.push("|".to_owned());
            }

            tokens.extend(level.iter().map(|w| format!("{:04X}", w)));
        }

        write!(f, "[{}]", tokens.join(" "))
    }
}
