//! Symbol pool seams used by the codec.

use crate::error::PoolError;
use std::collections::HashMap;
use tracing::warn;

/// Resolves 1-based constant indices to strings.
pub trait SymbolPool {
    fn resolve(&self, index: u16) -> std::result::Result<String, PoolError>;
}

/// Context for interning strings while encoding a table.
pub trait SymbolInterner {
    fn intern_str(&mut self, s: &str) -> std::result::Result<u16, PoolError>;
}

impl<P: SymbolPool + ?Sized> SymbolPool for &P {
    fn resolve(&self, index: u16) -> std::result::Result<String, PoolError> {
        (**self).resolve(index)
    }
}

/// Adapts a lookup closure into a [`SymbolPool`].
pub struct FnPool<F>(F);

pub fn pool_fn<F>(resolve: F) -> FnPool<F>
where
    F: Fn(u16) -> std::result::Result<String, PoolError>,
{
    FnPool(resolve)
}

impl<F> SymbolPool for FnPool<F>
where
    F: Fn(u16) -> std::result::Result<String, PoolError>,
{
    fn resolve(&self, index: u16) -> std::result::Result<String, PoolError> {
        (self.0)(index)
    }
}

/// In-memory pool with 1-based indices. Index 0 is never valid.
#[derive(Debug, Clone, Default)]
pub struct StringPool {
    entries: Vec<String>,
    lookup: HashMap<String, u16>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: u16) -> Option<&str> {
        let pos = usize::from(index).checked_sub(1)?;
        self.entries.get(pos).map(String::as_str)
    }
}

impl SymbolPool for StringPool {
    fn resolve(&self, index: u16) -> std::result::Result<String, PoolError> {
        self.get(index)
            .map(str::to_string)
            .ok_or_else(|| format!("no string constant at index {index}").into())
    }
}

impl SymbolInterner for StringPool {
    fn intern_str(&mut self, s: &str) -> std::result::Result<u16, PoolError> {
        if let Some(&index) = self.lookup.get(s) {
            return Ok(index);
        }
        let index = u16::try_from(self.entries.len() + 1)
            .map_err(|_| format!("string pool is full, cannot intern {s:?}"))?;
        self.entries.push(s.to_string());
        self.lookup.insert(s.to_string(), index);
        Ok(index)
    }
}

impl<S: AsRef<str>> FromIterator<S> for StringPool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pool = StringPool::new();
        let mut iter = iter.into_iter();
        while let Some(s) = iter.next() {
            let s = s.as_ref();
            let Ok(index) = u16::try_from(pool.entries.len() + 1) else {
                let dropped = 1 + iter.by_ref().count();
                warn!(
                    kept = pool.entries.len(),
                    dropped, "string pool index space exhausted, dropping remaining strings"
                );
                break;
            };
            // Duplicates still occupy their own index, like a real constant pool.
            pool.entries.push(s.to_string());
            pool.lookup.entry(s.to_string()).or_insert(index);
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_one_based() {
        let pool: StringPool = ["this", "LFoo;"].into_iter().collect();
        assert!(pool.resolve(0).is_err());
        assert_eq!(pool.resolve(1).expect("index 1"), "this");
        assert_eq!(pool.resolve(2).expect("index 2"), "LFoo;");
        assert!(pool.resolve(3).is_err());
    }

    #[test]
    fn test_closure_pool() {
        let pool = pool_fn(|index| match index {
            7 => Ok("value".to_string()),
            _ => Err("missing".into()),
        });
        assert_eq!(pool.resolve(7).expect("index 7"), "value");
        assert!(pool.resolve(1).is_err());
    }

    #[test]
    fn test_collect_stops_at_last_index() {
        let pool: StringPool = (0..70_000u32).map(|i| format!("v{i}")).collect();
        assert_eq!(pool.len(), usize::from(u16::MAX));
        assert_eq!(pool.resolve(u16::MAX).expect("last index"), "v65534");
    }

    #[test]
    fn test_intern_rejects_full_pool() {
        let mut pool: StringPool = (0..u32::from(u16::MAX)).map(|i| format!("v{i}")).collect();
        assert_eq!(pool.intern_str("v0").expect("existing entry"), 1);
        assert!(pool.intern_str("fresh").is_err());
    }

    #[test]
    fn test_intern_deduplicates() {
        let mut pool = StringPool::new();
        let a = pool.intern_str("I").expect("intern");
        let b = pool.intern_str("count").expect("intern");
        let c = pool.intern_str("I").expect("intern");
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(a, c);
        assert_eq!(pool.len(), 2);
    }
}
