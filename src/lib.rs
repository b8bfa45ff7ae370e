//! # rjs-lint
//!
//! A single-pass lexical-scope analyzer for JavaScript: parses a source file
//! with `oxc_parser`, walks it once with [`driver::analyze_program`], and
//! reports undeclared-variable, redeclaration, and illegal-assignment
//! diagnostics through the [`analyzer`] crate's event interface.
//!
//! The three pieces are independently usable: [`parser::parse_js`] for just
//! the AST, [`analyzer::ScopeAnalyzer`] for driving the event interface from
//! something other than this crate's own driver, or [`driver::analyze_program`]
//! for the whole pipeline minus parsing.

pub mod analyzer;
pub mod driver;
pub mod parser;
