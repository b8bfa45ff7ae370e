//! Scenario-driven tests exercising [`ScopeAnalyzer`] end to end through its
//! event interface directly, independent of any particular driver. Unit
//! tests for individual resolution rules live alongside the code that
//! implements them in `linter.rs`; this file is for scenarios that combine
//! several rules the way a real program would.

use crate::analyzer::{CollectingSink, Diagnostic, Identifier, ScopeAnalyzer, Span, VariableKind};

fn name(raw: &str) -> Identifier {
    Identifier::new(raw, Span::new(0, raw.len() as u32))
}

fn run(build: impl FnOnce(&mut ScopeAnalyzer<CollectingSink>)) -> Vec<Diagnostic> {
    let mut analyzer = ScopeAnalyzer::new(CollectingSink::new());
    build(&mut analyzer);
    analyzer.into_sink().into_diagnostics()
}

mod hoisting {
    use super::*;

    #[test]
    fn var_declared_deep_inside_nested_blocks_is_visible_at_function_top() {
        let diagnostics = run(|a| {
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.variable_use(name("counter"));
            a.enter_block_scope();
            a.enter_block_scope();
            a.variable_declaration(name("counter"), VariableKind::Var);
            a.exit_block_scope();
            a.exit_block_scope();
            a.exit_function_scope();
            a.end_of_module();
        });
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn function_hoisted_out_of_a_for_scope_shadows_an_outer_var() {
        let diagnostics = run(|a| {
            a.variable_declaration(name("task"), VariableKind::Var);
            a.enter_for_scope();
            a.variable_declaration(name("task"), VariableKind::Function);
            a.exit_for_scope();
            a.end_of_module();
        });
        assert!(diagnostics.is_empty());
    }
}

mod closures {
    use super::*;

    #[test]
    fn two_nested_functions_both_resolve_against_the_module_scope() {
        let diagnostics = run(|a| {
            a.variable_declaration(name("state"), VariableKind::Let);
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.variable_use(name("state"));
            a.exit_function_scope();
            a.variable_assignment(name("state"));
            a.exit_function_scope();
            a.end_of_module();
        });
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn a_closure_assigning_a_const_declared_afterward_is_reported_without_the_before_declaration_variant() {
        // The closure might run after `total` is declared, so this can't be
        // treated as an assignment-before-declaration; it is still illegal
        // because `total` is const regardless of when the closure runs.
        let diagnostics = run(|a| {
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.variable_assignment(name("total"));
            a.exit_function_scope();
            a.variable_declaration(name("total"), VariableKind::Const);
            a.end_of_module();
        });
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], Diagnostic::AssignmentToConstVariable { .. }));
    }
}

mod redeclaration_edge_cases {
    use super::*;

    #[test]
    fn catch_parameter_may_be_redeclared_as_var_in_the_same_scope() {
        let diagnostics = run(|a| {
            a.variable_declaration(name("err"), VariableKind::Catch);
            a.variable_declaration(name("err"), VariableKind::Var);
            a.end_of_module();
        });
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn two_function_declarations_of_the_same_name_do_not_conflict() {
        let diagnostics = run(|a| {
            a.variable_declaration(name("handler"), VariableKind::Function);
            a.variable_declaration(name("handler"), VariableKind::Function);
            a.end_of_module();
        });
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn let_and_var_of_the_same_name_conflict() {
        let diagnostics = run(|a| {
            a.variable_declaration(name("x"), VariableKind::Let);
            a.variable_declaration(name("x"), VariableKind::Var);
            a.end_of_module();
        });
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], Diagnostic::RedeclarationOfVariable { .. }));
    }
}

mod exports {
    use super::*;

    #[test]
    fn exporting_a_declared_binding_is_clean() {
        let diagnostics = run(|a| {
            a.variable_declaration(name("widget"), VariableKind::Const);
            a.variable_export_use(name("widget"));
            a.end_of_module();
        });
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn exporting_an_undeclared_binding_is_reported() {
        let diagnostics = run(|a| {
            a.variable_export_use(name("missing"));
            a.end_of_module();
        });
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(diagnostics[0], Diagnostic::UseOfUndeclaredVariable { .. }));
    }
}

mod integration {
    use super::*;

    #[test]
    fn a_closure_referencing_a_later_top_level_let_is_legal() {
        // Roughly: `function run() { return total; } let total = 0; run();`
        // `run` is only ever called after `total` exists, so this is fine.
        let diagnostics = run(|a| {
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.variable_use(name("total"));
            a.exit_function_scope();
            a.variable_declaration(name("run"), VariableKind::Function);
            a.variable_declaration(name("total"), VariableKind::Let);
            a.variable_use(name("run"));
            a.end_of_module();
        });
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn a_program_that_assigns_a_const_twice_reports_once_per_site() {
        let diagnostics = run(|a| {
            a.variable_declaration(name("limit"), VariableKind::Const);
            a.variable_assignment(name("limit"));
            a.variable_assignment(name("limit"));
            a.end_of_module();
        });
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .all(|d| matches!(d, Diagnostic::AssignmentToConstVariable { .. })));
    }
}
