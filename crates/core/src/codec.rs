//! Binary layout of a local-variable scope attribute body.
//!
//! ```text
//! u16 count
//! count x { u16 start_offset, u16 length, u16 name_index, u16 descriptor_index, u16 slot }
//! ```
//!
//! All fields are big-endian. The name and descriptor indices point into a
//! [`SymbolPool`].

use crate::error::{Result, ScopeError};
use crate::pool::{SymbolInterner, SymbolPool};
use crate::scope::Scope;
use crate::table::ScopeTable;
use std::io::{ErrorKind, Read, Write};
use tracing::{debug, trace, warn};

pub const HEADER_LEN: usize = 2;
pub const RECORD_LEN: usize = 10;

/// Byte length of an attribute body holding `count` records.
pub fn encoded_len(count: u16) -> usize {
    HEADER_LEN + RECORD_LEN * usize::from(count)
}

fn read_u16<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

fn truncated_or_io(err: std::io::Error, expected: u16, decoded: u16) -> ScopeError {
    if err.kind() == ErrorKind::UnexpectedEof {
        warn!(expected, decoded, "scope table truncated");
        ScopeError::TruncatedInput { expected, decoded }
    } else {
        ScopeError::Io(err)
    }
}

fn resolve<P: SymbolPool + ?Sized>(pool: &P, index: u16) -> Result<String> {
    pool.resolve(index).map_err(|source| {
        warn!(index, "unresolvable symbol in scope table: {}", source);
        ScopeError::MalformedSymbolReference { index, source }
    })
}

/// Decode one scope table, consuming exactly `2 + 10 * count` bytes on success.
///
/// A stream that ends before the header or any declared record yields
/// [`ScopeError::TruncatedInput`]; no partial table is returned.
pub fn decode<R, P>(reader: &mut R, pool: &P) -> Result<ScopeTable>
where
    R: Read + ?Sized,
    P: SymbolPool + ?Sized,
{
    let count = read_u16(reader).map_err(|e| truncated_or_io(e, 0, 0))?;
    debug!(count, "decoding scope table");
    if count == 0 {
        return Ok(ScopeTable::EMPTY);
    }

    let mut table = ScopeTable::with_capacity(usize::from(count));
    for decoded in 0..count {
        let mut record = [0u8; RECORD_LEN];
        reader
            .read_exact(&mut record)
            .map_err(|e| truncated_or_io(e, count, decoded))?;

        let field = |i: usize| u16::from_be_bytes([record[2 * i], record[2 * i + 1]]);
        let start_offset = field(0);
        let length = field(1);
        let name_index = field(2);
        let descriptor_index = field(3);
        let slot = field(4);

        let name = resolve(pool, name_index)?;
        let descriptor = resolve(pool, descriptor_index)?;
        trace!(slot, start_offset, length, %name, %descriptor, "scope");

        table.push(Scope::new(start_offset, length, name, descriptor, slot));
    }

    Ok(table)
}

/// Decode from a byte slice, returning the table and the number of bytes consumed.
pub fn decode_bytes<P: SymbolPool + ?Sized>(bytes: &[u8], pool: &P) -> Result<(ScopeTable, usize)> {
    let mut cursor = bytes;
    let table = decode(&mut cursor, pool)?;
    Ok((table, bytes.len() - cursor.len()))
}

/// Write `table` in attribute layout, interning names and descriptors.
pub fn encode<W, I>(table: &ScopeTable, writer: &mut W, interner: &mut I) -> Result<()>
where
    W: Write + ?Sized,
    I: SymbolInterner + ?Sized,
{
    let count = u16::try_from(table.len()).map_err(|_| ScopeError::TooManyScopes(table.len()))?;
    writer.write_all(&count.to_be_bytes())?;

    for scope in table {
        let name_index = intern(interner, scope.name())?;
        let descriptor_index = intern(interner, scope.descriptor())?;
        for value in [
            scope.start_offset(),
            scope.length(),
            name_index,
            descriptor_index,
            scope.slot(),
        ] {
            writer.write_all(&value.to_be_bytes())?;
        }
    }
    Ok(())
}

fn intern<I: SymbolInterner + ?Sized>(interner: &mut I, s: &str) -> Result<u16> {
    interner.intern_str(s).map_err(|source| ScopeError::Intern {
        symbol: s.to_string(),
        source,
    })
}
