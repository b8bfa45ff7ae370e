//! # Used-Variable List
//!
//! Per-scope pending uses awaiting a matching declaration. A use is only ever
//! appended here when it is not already resolvable in the scope where it occurred;
//! resolution and error reporting happen at declaration time (§4.3) or at scope
//! exit via propagation (§4.7).

use serde::{Deserialize, Serialize};

use crate::analyzer::identifier::Identifier;

/// How an identifier was used at a given site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsedVariableKind {
    /// A plain value read.
    Use,
    /// The left-hand side of `=` (or a compound assignment).
    Assignment,
    /// The operand of `typeof`.
    Typeof,
    /// A re-export binding (`export { name }`).
    Export,
}

/// A pending use: an identifier plus how it was used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsedVariable {
    pub name: Identifier,
    pub kind: UsedVariableKind,
}

impl UsedVariable {
    pub fn new(name: Identifier, kind: UsedVariableKind) -> Self {
        Self { name, kind }
    }
}
