/// Bounded quantity named by a [`Error::Range`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Count,
    Sides,
    Keep,
    Modifier,
    Multiplier,
    Batch,
    Difficulty,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Count => "dice count",
            Field::Sides => "dice sides",
            Field::Keep => "keep amount",
            Field::Modifier => "modifier",
            Field::Multiplier => "multiplier",
            Field::Batch => "repeat count",
            Field::Difficulty => "difficulty",
        };
        write!(f, "{name}")
    }
}

/// Crate Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed syntax, `position` is a character index into the raw input
    Parse { reason: String, position: usize },
    /// Well formed expression whose numbers exceed the configured bounds
    Range { field: Field, value: u64, limit: u64 },
}

impl Error {
    pub(crate) fn parse<S: Into<String>>(reason: S, position: usize) -> Self {
        Self::Parse {
            reason: reason.into(),
            position,
        }
    }

    pub(crate) fn range(field: Field, value: u64, limit: u64) -> Self {
        Self::Range {
            field,
            value,
            limit,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { reason, position } => write!(f, "{reason} at position {position}"),
            Self::Range {
                field: Field::Modifier,
                value,
                limit,
            } => write!(f, "modifier {value} is out of range (-{limit}..={limit})"),
            Self::Range {
                field,
                value,
                limit,
            } => write!(f, "{field} {value} is out of range (1..={limit})"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
