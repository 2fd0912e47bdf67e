use thiserror::Error;

/// Errors surfaced by the resona engines.
///
/// All failures are local and synchronous: a precondition was not met, and
/// the caller is expected to re-drive the correct sequence
/// (train -> crystallize -> recall).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Adjacency or recall was requested before `crystallize()`.
    #[error("network not crystallized yet")]
    NotCrystallized,

    /// A pattern or query does not match the vocabulary size.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// An edge or query target references a symbol absent from the vocabulary.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::NotCrystallized.to_string(),
            "network not crystallized yet"
        );
        assert_eq!(
            Error::DimensionMismatch {
                expected: 8,
                found: 3
            }
            .to_string(),
            "dimension mismatch: expected 8, found 3"
        );
        assert_eq!(
            Error::UnknownSymbol("Zeppelin".to_string()).to_string(),
            "unknown symbol: Zeppelin"
        );
    }
}
