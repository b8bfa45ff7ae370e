//! # Global & Module Predeclared Sets
//!
//! A process-wide, immutable set of host/language globals (§3), built once and
//! shared read-only across every `ScopeAnalyzer`. Module scopes additionally get
//! a small set of Node.js-style writable bindings pre-declared at construction.

use std::sync::OnceLock;

use crate::analyzer::identifier::Identifier;
use crate::analyzer::variable::{DeclaredVariableSet, VariableKind};

const WRITABLE_GLOBAL_VARIABLES: &[&str] = &[
    // Value properties of the global object.
    "globalThis",
    // Function properties of the global object.
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
    "eval",
    "isFinite",
    "isNaN",
    "parseFloat",
    "parseInt",
    // Constructor properties of the global object.
    "Array",
    "ArrayBuffer",
    "BigInt",
    "BigInt64Array",
    "BigUint64Array",
    "Boolean",
    "DataView",
    "Date",
    "Error",
    "EvalError",
    "Float32Array",
    "Float64Array",
    "Function",
    "Int16Array",
    "Int32Array",
    "Int8Array",
    "Map",
    "Number",
    "Object",
    "Promise",
    "Proxy",
    "RangeError",
    "ReferenceError",
    "RegExp",
    "Set",
    "SharedArrayBuffer",
    "String",
    "Symbol",
    "SyntaxError",
    "TypeError",
    "URIError",
    "Uint16Array",
    "Uint32Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "WeakMap",
    "WeakSet",
    // Other properties of the global object.
    "Atomics",
    "JSON",
    "Math",
    "Reflect",
    // Node.js host globals.
    "Buffer",
    "GLOBAL",
    "Intl",
    "TextDecoder",
    "TextEncoder",
    "URL",
    "URLSearchParams",
    "WebAssembly",
    "clearImmediate",
    "clearInterval",
    "clearTimeout",
    "console",
    "escape",
    "global",
    "process",
    "queueMicrotask",
    "root",
    "setImmediate",
    "setInterval",
    "setTimeout",
    "unescape",
];

const NON_WRITABLE_GLOBAL_VARIABLES: &[&str] = &["Infinity", "NaN", "undefined"];

const WRITABLE_MODULE_VARIABLES: &[&str] =
    &["__dirname", "__filename", "exports", "module", "require"];

fn make_global_variables() -> DeclaredVariableSet {
    let mut vars = DeclaredVariableSet::new();
    for name in WRITABLE_GLOBAL_VARIABLES {
        vars.add_predefined_variable_declaration(Identifier::synthetic(*name), VariableKind::Function);
    }
    for name in NON_WRITABLE_GLOBAL_VARIABLES {
        vars.add_predefined_variable_declaration(Identifier::synthetic(*name), VariableKind::Const);
    }
    vars
}

/// The process-wide predefined global set, built once on first use.
pub fn global_variables() -> &'static DeclaredVariableSet {
    static GLOBALS: OnceLock<DeclaredVariableSet> = OnceLock::new();
    GLOBALS.get_or_init(make_global_variables)
}

/// Declares the Node.js-style module-scope bindings into `scope`.
pub fn declare_module_variables(scope: &mut DeclaredVariableSet) {
    for name in WRITABLE_MODULE_VARIABLES {
        scope.add_predefined_variable_declaration(Identifier::synthetic(*name), VariableKind::Function);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_is_const() {
        let globals = global_variables();
        let undefined = globals.find(&Identifier::synthetic("undefined")).unwrap();
        assert_eq!(undefined.kind(), VariableKind::Const);
        assert!(undefined.is_global());
    }

    #[test]
    fn math_is_writable_function_kind() {
        let globals = global_variables();
        let math = globals.find(&Identifier::synthetic("Math")).unwrap();
        assert_eq!(math.kind(), VariableKind::Function);
    }

    #[test]
    fn unknown_name_is_absent() {
        let globals = global_variables();
        assert!(globals.find(&Identifier::synthetic("totallyNotAGlobal")).is_none());
    }
}
