//! Ordered collection of decoded scopes for one method.

use crate::scope::Scope;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Scopes in decode/append order. Lookups return the earliest match in that
/// order; `parameter_names` lets the latest match win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
}

impl ScopeTable {
    pub const EMPTY: ScopeTable = ScopeTable { scopes: Vec::new() };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    pub fn from_scopes(scopes: Vec<Scope>) -> Self {
        Self { scopes }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scopes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scope> {
        self.scopes.iter()
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Append `other`'s scopes after ours, keeping both orders intact.
    pub fn merge(&mut self, other: ScopeTable) {
        debug!(
            existing = self.scopes.len(),
            incoming = other.scopes.len(),
            "merging scope tables"
        );
        self.scopes.extend(other.scopes);
    }

    /// First scope in table order that covers `offset` for `slot`.
    pub fn lookup(&self, slot: u16, offset: u16) -> Option<&Scope> {
        self.scopes
            .iter()
            .find(|s| s.slot() == slot && s.is_active_at(offset))
    }

    pub fn lookup_name(&self, slot: u16, offset: u16) -> Option<&str> {
        self.lookup(slot, offset).map(Scope::name)
    }

    pub fn lookup_descriptor(&self, slot: u16, offset: u16) -> Option<&str> {
        self.lookup(slot, offset).map(Scope::descriptor)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.scopes.iter().any(|s| s.name() == name)
    }

    /// Slot -> name for scopes starting at offset 0. A later scope on the
    /// same slot overwrites an earlier one.
    pub fn parameter_names(&self) -> HashMap<u16, String> {
        let mut names = HashMap::new();
        for scope in self.scopes.iter().filter(|s| s.is_parameter()) {
            names.insert(scope.slot(), scope.name().to_string());
        }
        names
    }

    /// Every scope active at `offset`, in table order.
    pub fn visible_at(&self, offset: u16) -> impl Iterator<Item = &Scope> {
        self.scopes.iter().filter(move |s| s.is_active_at(offset))
    }
}

impl FromIterator<Scope> for ScopeTable {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        Self {
            scopes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Scope> for ScopeTable {
    fn extend<I: IntoIterator<Item = Scope>>(&mut self, iter: I) {
        self.scopes.extend(iter);
    }
}

impl IntoIterator for ScopeTable {
    type Item = Scope;
    type IntoIter = std::vec::IntoIter<Scope>;

    fn into_iter(self) -> Self::IntoIter {
        self.scopes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScopeTable {
    type Item = &'a Scope;
    type IntoIter = std::slice::Iter<'a, Scope>;

    fn into_iter(self) -> Self::IntoIter {
        self.scopes.iter()
    }
}
