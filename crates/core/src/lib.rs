pub mod codec;
pub mod error;
pub mod logging;
pub mod pool;
pub mod scope;
pub mod table;

pub use codec::{decode, decode_bytes, encode};
pub use error::{PoolError, Result, ScopeError};
pub use pool::{FnPool, StringPool, SymbolInterner, SymbolPool, pool_fn};
pub use scope::Scope;
pub use table::ScopeTable;
