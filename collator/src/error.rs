use std::path::PathBuf;

use thiserror::Error;

/// ошибка загрузки таблиц. без таблиц коллатор не может работать, поэтому все ошибки - при создании
#[derive(Debug, Error)]
pub enum TableError
{
    #[error("failed to read `{}`", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}:{line}: {kind}")]
    Parse
    {
        source_name: &'static str,
        line: usize,
        kind: ParseErrorKind,
    },

    #[error("{0} contains no entries")]
    Empty(&'static str),

    #[error("failed to bake collation tables")]
    Encode(#[source] bincode::Error),

    #[error("baked collation tables are corrupt or incompatible")]
    Decode(#[source] bincode::Error),

    #[error("baked collation tables are inconsistent: {0}")]
    Inconsistent(&'static str),
}

/// что именно не так со строкой данных
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind
{
    #[error("missing `;` separator")]
    MissingSeparator,

    #[error("invalid code point `{0}`")]
    InvalidCodepoint(String),

    #[error("sequence of {0} code points, at most 3 are supported")]
    SequenceTooLong(usize),

    #[error("no collation elements")]
    NoWeights,

    #[error("malformed collation element `{0}`")]
    MalformedElement(String),

    #[error("{level} weight {value:#06X} exceeds {max:#06X}")]
    WeightOutOfRange
    {
        level: &'static str,
        value: u32,
        max: u16,
    },

    #[error("collation element collides with the array terminator")]
    ReservedWeight,

    #[error("invalid canonical combining class `{0}`")]
    InvalidCombiningClass(String),

    #[error("canonical decomposition of {0} code points, at most 4 are supported")]
    DecompositionTooLong(usize),

    #[error("canonical decomposition refers back to itself")]
    CyclicDecomposition,

    #[error("malformed @implicitweights directive")]
    MalformedDirective,
}

impl TableError
{
    /// ошибка разбора строки
    pub(crate) fn parse(source_name: &'static str, line: usize, kind: ParseErrorKind) -> Self
    {
        Self::Parse {
            source_name,
            line,
            kind,
        }
    }
}
