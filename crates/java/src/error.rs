use thiserror::Error;
use varscope_core::ScopeError;

#[derive(Error, Debug)]
pub enum JavaScopeError {
    #[error("scope table error: {0}")]
    Scope(#[from] ScopeError),
    #[error("invalid method descriptor {descriptor:?}: {message}")]
    Descriptor { descriptor: String, message: String },
}

pub type Result<T> = std::result::Result<T, JavaScopeError>;
