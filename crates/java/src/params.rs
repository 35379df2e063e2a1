use ristretto_classfile::{BaseType, FieldType};
use varscope_core::ScopeTable;

use crate::error::{JavaScopeError, Result};

fn slot_width(ty: &FieldType) -> u16 {
    match ty {
        FieldType::Base(BaseType::Long) | FieldType::Base(BaseType::Double) => 2,
        _ => 1,
    }
}

/// Local slot of each declared parameter of a method, in declaration order.
///
/// Instance methods reserve slot 0 for `this`; `long` and `double` take two slots.
pub fn parameter_slots(descriptor: &str, is_static: bool) -> Result<Vec<u16>> {
    let (params, _) =
        FieldType::parse_method_descriptor(descriptor).map_err(|e| JavaScopeError::Descriptor {
            descriptor: descriptor.to_string(),
            message: format!("{e:?}"),
        })?;

    let mut next: u16 = if is_static { 0 } else { 1 };
    let mut slots = Vec::with_capacity(params.len());
    for ty in params.iter() {
        slots.push(next);
        next = next
            .checked_add(slot_width(ty))
            .ok_or_else(|| JavaScopeError::Descriptor {
                descriptor: descriptor.to_string(),
                message: "parameters exceed the local slot range".to_string(),
            })?;
    }
    Ok(slots)
}

/// Recorded name for each declared parameter, `None` where the table has none.
pub fn named_parameters(
    table: &ScopeTable,
    descriptor: &str,
    is_static: bool,
) -> Result<Vec<Option<String>>> {
    let mut names = table.parameter_names();
    Ok(parameter_slots(descriptor, is_static)?
        .into_iter()
        .map(|slot| names.remove(&slot))
        .collect())
}
