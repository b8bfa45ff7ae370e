//! # Diagnostic Sink
//!
//! The analyzer never raises exceptions; every diagnosable condition is reported
//! once, at the earliest point it becomes decidable, to a `DiagnosticSink` (§7).
//! Rendering structured diagnostics into human-readable text is explicitly out of
//! the core's scope (§1) — that lives in the CLI (`crate::main`).

use thiserror::Error;

use crate::analyzer::identifier::Identifier;
use crate::analyzer::variable::VariableKind;

/// One of the fixed enumeration of error kinds the analyzer can report.
#[derive(Error, Debug, Clone)]
pub enum Diagnostic {
    #[error("use of undeclared variable '{}'", .name.raw_name())]
    UseOfUndeclaredVariable { name: Identifier },

    #[error("assignment to undeclared variable '{}'", .name.raw_name())]
    AssignmentToUndeclaredVariable { name: Identifier },

    #[error("assignment to const global variable '{}'", .assignment.raw_name())]
    AssignmentToConstGlobalVariable { assignment: Identifier },

    #[error("assignment to const variable '{}'", .assignment.raw_name())]
    AssignmentToConstVariable {
        declaration: Identifier,
        assignment:  Identifier,
        kind:        VariableKind,
    },

    #[error(
        "assignment to const variable '{}' before its declaration",
        .assignment.raw_name()
    )]
    AssignmentToConstVariableBeforeItsDeclaration {
        declaration: Identifier,
        assignment:  Identifier,
        kind:        VariableKind,
    },

    #[error("assignment to variable '{}' before its declaration", .assignment.raw_name())]
    AssignmentBeforeVariableDeclaration {
        assignment:  Identifier,
        declaration: Identifier,
    },

    #[error("variable '{}' used before declaration", .use_site.raw_name())]
    VariableUsedBeforeDeclaration {
        use_site:    Identifier,
        declaration: Identifier,
    },

    #[error(
        "function '{}' called before its declaration, which is blocked by a nested scope",
        .use_site.raw_name()
    )]
    FunctionCallBeforeDeclarationInBlockedScope {
        use_site:    Identifier,
        declaration: Identifier,
    },

    #[error("redeclaration of variable '{}'", .redeclaration.raw_name())]
    RedeclarationOfVariable {
        redeclaration:         Identifier,
        original_declaration: Identifier,
    },

    #[error("redeclaration of global variable '{}'", .redeclaration.raw_name())]
    RedeclarationOfGlobalVariable { redeclaration: Identifier },
}

/// A callback receiving structured error records. Implementations decide what
/// to do with a diagnostic (render it, collect it, count it); the analyzer
/// itself never inspects what the sink does.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// A sink that simply collects every diagnostic in report order, for tests and
/// for the CLI (which renders them afterward).
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
