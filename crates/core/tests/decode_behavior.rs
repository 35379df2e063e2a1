use varscope_core::{Scope, ScopeError, ScopeTable, StringPool, decode, decode_bytes};

fn pool() -> StringPool {
    ["this", "LDemo;", "i", "I", "s", "Ljava/lang/String;"]
        .into_iter()
        .collect()
}

fn record(start: u16, length: u16, name: u16, descriptor: u16, slot: u16) -> Vec<u8> {
    [start, length, name, descriptor, slot]
        .iter()
        .flat_map(|v| v.to_be_bytes())
        .collect()
}

fn attribute(count: u16, records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = count.to_be_bytes().to_vec();
    for r in records {
        out.extend_from_slice(r);
    }
    out
}

#[test]
fn empty_attribute_yields_empty_table() {
    let table = decode(&mut &[0u8, 0][..], &pool()).expect("decode");
    assert_eq!(table, ScopeTable::EMPTY);
    assert_eq!(table.lookup_name(0, 0), None);
    assert_eq!(table.lookup_descriptor(0, 0), None);
    assert!(!table.contains_name("this"));
    assert!(table.parameter_names().is_empty());
}

#[test]
fn records_keep_stream_order() {
    let bytes = attribute(
        3,
        &[
            record(0, 30, 1, 2, 0),
            record(4, 20, 3, 4, 1),
            record(2, 28, 5, 6, 1),
        ],
    );
    let (table, consumed) = decode_bytes(&bytes, &pool()).expect("decode");
    assert_eq!(consumed, 2 + 10 * 3);

    let expected = vec![
        Scope::new(0, 30, "this", "LDemo;", 0),
        Scope::new(4, 20, "i", "I", 1),
        Scope::new(2, 28, "s", "Ljava/lang/String;", 1),
    ];
    assert_eq!(table.scopes(), expected.as_slice());

    // Both slot-1 scopes cover offset 10; the first in the stream wins.
    assert_eq!(table.lookup_name(1, 10), Some("i"));
    assert_eq!(table.lookup_descriptor(1, 10), Some("I"));
    // Only the later scope covers offset 2.
    assert_eq!(table.lookup_name(1, 2), Some("s"));
}

#[test]
fn truncated_second_record_returns_no_table() {
    let bytes = attribute(2, &[record(0, 10, 1, 2, 0)]);
    let err = decode_bytes(&bytes, &pool()).unwrap_err();
    assert!(matches!(
        err,
        ScopeError::TruncatedInput {
            expected: 2,
            decoded: 1
        }
    ));
}

#[test]
fn unresolvable_name_aborts_decode() {
    let bytes = attribute(2, &[record(0, 10, 1, 2, 0), record(0, 10, 42, 2, 1)]);
    let err = decode_bytes(&bytes, &pool()).unwrap_err();
    match err {
        ScopeError::MalformedSymbolReference { index, source } => {
            assert_eq!(index, 42);
            assert!(source.to_string().contains("42"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reader_position_advances_exactly() {
    let mut bytes = attribute(1, &[record(0, 10, 3, 4, 2)]);
    bytes.extend_from_slice(b"rest");
    let mut reader = std::io::Cursor::new(bytes);

    let table = decode(&mut reader, &pool()).expect("decode");
    assert_eq!(table.len(), 1);
    assert_eq!(reader.position(), 12);
}
