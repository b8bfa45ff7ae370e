//! # Analyzer
//!
//! A single-pass lexical-scope analyzer for JavaScript. It consumes one
//! event at a time from a driver walking a parsed program (`crate::driver`)
//! and never looks backward or outward to answer a question: every pending
//! question either resolves the moment it becomes decidable, or is carried
//! forward until the enclosing scope closes.
//!
//! ## Modules
//!
//! - [`identifier`] — source identifiers and their normalized (escape-decoded) names.
//! - [`variable`] — declared-variable bookkeeping per scope.
//! - [`used_variable`] — pending-use bookkeeping per scope.
//! - [`scope`] — the scope record and the reusable scope stack.
//! - [`globals`] — the predefined global and module-binding sets.
//! - [`diagnostics`] — the diagnostic enum and the sink trait it is reported through.
//! - [`linter`] — [`ScopeAnalyzer`], the event interface itself.

pub mod diagnostics;
pub mod globals;
pub mod identifier;
mod linter;
pub mod scope;
pub mod used_variable;
pub mod variable;

#[cfg(test)]
mod tests;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink};
pub use identifier::{Identifier, Span};
pub use linter::ScopeAnalyzer;
pub use used_variable::UsedVariableKind;
pub use variable::VariableKind;
