//! # Declared-Variable Set
//!
//! Per-scope collection of declarations with kind and origin metadata. Declarations
//! are kept in an ordered multiset: conflicts are reported explicitly at declaration
//! time (§4.5), so later lookups never need to reconcile duplicates.

use serde::{Deserialize, Serialize};

use crate::analyzer::identifier::Identifier;

/// Variable kind, as declared by the source construct that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableKind {
    Var,
    Let,
    Const,
    Function,
    Class,
    Import,
    Parameter,
    Catch,
}

/// Where a declared variable's binding textually lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclaredVariableOrigin {
    /// Declared directly in this scope by source text.
    CurrentScope,
    /// Hoisted into this scope from a nested block/for scope. Only ever used
    /// with `VariableKind::Var` or `VariableKind::Function`.
    DescendantScope,
}

/// A single declared-variable entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclaredVariable {
    name:     Identifier,
    kind:     VariableKind,
    origin:   DeclaredVariableOrigin,
    is_global: bool,
}

impl DeclaredVariable {
    pub fn local(name: Identifier, kind: VariableKind, origin: DeclaredVariableOrigin) -> Self {
        if origin == DeclaredVariableOrigin::DescendantScope {
            debug_assert!(
                matches!(kind, VariableKind::Var | VariableKind::Function),
                "only var/function declarations may be hoisted from a descendant scope"
            );
        }
        Self {
            name,
            kind,
            origin,
            is_global: false,
        }
    }

    /// A predefined global or module binding: always `CurrentScope`, flagged
    /// `is_global` so it's never reported as a "declared here" location.
    pub fn predefined(name: Identifier, kind: VariableKind) -> Self {
        Self {
            name,
            kind,
            origin: DeclaredVariableOrigin::CurrentScope,
            is_global: true,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn origin(&self) -> DeclaredVariableOrigin {
        self.origin
    }

    pub fn is_global(&self) -> bool {
        self.is_global
    }
}

/// Ordered multiset of declared variables for one scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclaredVariableSet {
    variables: Vec<DeclaredVariable>,
}

impl DeclaredVariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new local declaration and returns a reference to it.
    pub fn add_variable_declaration(
        &mut self,
        name: Identifier,
        kind: VariableKind,
        origin: DeclaredVariableOrigin,
    ) -> &DeclaredVariable {
        self.variables
            .push(DeclaredVariable::local(name, kind, origin));
        self.variables.last().expect("just pushed")
    }

    pub fn add_predefined_variable_declaration(&mut self, name: Identifier, kind: VariableKind) {
        self.variables.push(DeclaredVariable::predefined(name, kind));
    }

    /// Returns the first declared variable with a matching normalized name.
    /// Later declarations of the same conflicting name are retained (the
    /// conflict was already reported at declaration time) but are not
    /// observable through `find`.
    pub fn find(&self, name: &Identifier) -> Option<&DeclaredVariable> {
        self.variables
            .iter()
            .find(|var| var.name().normalized_name() == name.normalized_name())
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeclaredVariable> {
        self.variables.iter()
    }
}
