use ristretto_classfile::ConstantPool;
use tracing::warn;
use varscope_core::{ScopeTable, SymbolPool, decode_bytes, pool_fn};

use crate::error::Result;

/// View a class file's constant pool as a symbol pool. Only `Utf8` entries
/// resolve; anything else is a malformed reference.
pub fn class_pool(constant_pool: &ConstantPool) -> impl SymbolPool + '_ {
    pool_fn(move |index| {
        constant_pool
            .try_get_utf8(index)
            .map(|s| s.to_string())
            .map_err(|e| format!("constant #{index} is not a UTF-8 entry: {e:?}").into())
    })
}

/// Decode a `LocalVariableTable` attribute body against the owning class's pool.
pub fn decode_method_scopes(body: &[u8], constant_pool: &ConstantPool) -> Result<ScopeTable> {
    let (table, consumed) = decode_bytes(body, &class_pool(constant_pool))?;
    if consumed != body.len() {
        warn!(
            consumed,
            len = body.len(),
            "trailing bytes after local variable table"
        );
    }
    Ok(table)
}
