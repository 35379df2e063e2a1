use thiserror::Error;

/// Error raised by a [`SymbolPool`](crate::pool::SymbolPool) that cannot satisfy an index.
pub type PoolError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("truncated input: expected {expected} scope records, decoded {decoded}")]
    TruncatedInput { expected: u16, decoded: u16 },
    #[error("malformed symbol reference #{index}: {source}")]
    MalformedSymbolReference {
        index: u16,
        #[source]
        source: PoolError,
    },
    #[error("failed to intern symbol {symbol:?}: {source}")]
    Intern {
        symbol: String,
        #[source]
        source: PoolError,
    },
    #[error("too many scopes to encode: {0}")]
    TooManyScopes(usize),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScopeError>;
