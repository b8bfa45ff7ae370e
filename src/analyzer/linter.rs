//! # Scope Analyzer
//!
//! The event interface a driver calls while walking a program once,
//! left to right, depth first. Every method either resolves a pending
//! question immediately or defers it onto the enclosing scope; nothing is
//! ever looked up by walking outward at the point of use (§4.2, §9).
//!
//! The struct carries three pieces of state: the scope stack, a synthetic
//! "global scope" that the module scope propagates into at the very end
//! (§4.8), and the sink every diagnostic is reported through.

use crate::analyzer::diagnostics::{Diagnostic, DiagnosticSink};
use crate::analyzer::globals;
use crate::analyzer::identifier::Identifier;
use crate::analyzer::scope::{Scope, ScopeStack};
use crate::analyzer::used_variable::{UsedVariable, UsedVariableKind};
use crate::analyzer::variable::{DeclaredVariableOrigin, DeclaredVariableSet, VariableKind};

pub struct ScopeAnalyzer<S: DiagnosticSink> {
    scopes:       ScopeStack,
    global_scope: Scope,
    sink:         S,
}

impl<S: DiagnosticSink> ScopeAnalyzer<S> {
    pub fn new(sink: S) -> Self {
        let mut global_scope = Scope::default();
        global_scope.declared_variables = globals::global_variables().clone();

        let mut scopes = ScopeStack::new();
        globals::declare_module_variables(&mut scopes.module_scope_mut().declared_variables);

        Self { scopes, global_scope, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // -- scope entry -----------------------------------------------------

    pub fn enter_block_scope(&mut self) {
        self.scopes.push();
    }

    pub fn enter_for_scope(&mut self) {
        self.scopes.push();
    }

    pub fn enter_class_scope(&mut self) {
        self.scopes.push();
    }

    pub fn enter_function_scope(&mut self) {
        self.scopes.push();
    }

    /// Pushes a scope for a named function expression, making `name` visible
    /// only from inside the function's own body (§3, "function expression
    /// self-name").
    pub fn enter_named_function_scope(&mut self, name: Identifier) {
        self.scopes.push();
        self.scopes.current_scope_mut().function_expression_declaration = Some(name);
    }

    /// Called once parameters have been declared and the body is about to be
    /// walked. Forwards any uses made while evaluating parameter defaults to
    /// the enclosing scope immediately, without popping the function scope,
    /// since such uses can never refer to a variable the body goes on to
    /// declare.
    pub fn enter_function_scope_body(&mut self) {
        let (current, parent) = self.scopes.split_top_two_mut();
        propagate_uses(current, parent, true, true, &mut self.sink);
    }

    // -- scope exit --------------------------------------------------------

    pub fn exit_block_scope(&mut self) {
        self.exit_hoisting_scope();
    }

    pub fn exit_for_scope(&mut self) {
        self.exit_hoisting_scope();
    }

    fn exit_hoisting_scope(&mut self) {
        {
            let (current, parent) = self.scopes.split_top_two_mut();
            propagate_uses(current, parent, false, false, &mut self.sink);
        }
        self.propagate_declarations_to_parent();
        self.scopes.pop();
    }

    pub fn exit_class_scope(&mut self) {
        {
            let (current, parent) = self.scopes.split_top_two_mut();
            propagate_uses(current, parent, false, false, &mut self.sink);
        }
        debug_assert!(
            self.scopes
                .current_scope()
                .declared_variables
                .iter()
                .all(|var| var.kind() == VariableKind::Class),
            "a class scope declares nothing but its own members' class bindings"
        );
        self.scopes.pop();
    }

    pub fn exit_function_scope(&mut self) {
        {
            let (current, parent) = self.scopes.split_top_two_mut();
            propagate_uses(current, parent, true, true, &mut self.sink);
        }
        self.scopes.pop();
    }

    /// Hoists this scope's `var`/`function` declarations into the parent as
    /// `DescendantScope` entries (§4.7). Block and for scopes call this;
    /// function and class scopes never do.
    fn propagate_declarations_to_parent(&mut self) {
        let hoistable: Vec<(Identifier, VariableKind)> = self
            .scopes
            .current_scope()
            .declared_variables
            .iter()
            .filter(|var| matches!(var.kind(), VariableKind::Var | VariableKind::Function))
            .map(|var| (var.name().clone(), var.kind()))
            .collect();

        let parent = self.scopes.parent_scope_mut();
        for (name, kind) in hoistable {
            declare_variable(parent, name, kind, DeclaredVariableOrigin::DescendantScope, &mut self.sink);
        }
    }

    // -- declarations and uses --------------------------------------------

    pub fn variable_declaration(&mut self, name: Identifier, kind: VariableKind) {
        declare_variable(
            self.scopes.current_scope_mut(),
            name,
            kind,
            DeclaredVariableOrigin::CurrentScope,
            &mut self.sink,
        );
    }

    pub fn variable_use(&mut self, name: Identifier) {
        use_variable(self.scopes.current_scope_mut(), name, UsedVariableKind::Use, &mut self.sink);
    }

    pub fn variable_assignment(&mut self, name: Identifier) {
        use_variable(self.scopes.current_scope_mut(), name, UsedVariableKind::Assignment, &mut self.sink);
    }

    pub fn variable_typeof_use(&mut self, name: Identifier) {
        use_variable(self.scopes.current_scope_mut(), name, UsedVariableKind::Typeof, &mut self.sink);
    }

    pub fn variable_export_use(&mut self, name: Identifier) {
        use_variable(self.scopes.current_scope_mut(), name, UsedVariableKind::Export, &mut self.sink);
    }

    /// Called at the very end of the program. Propagates the module scope's
    /// remaining pending uses into the synthetic global scope and resolves
    /// everything left (§4.8).
    pub fn end_of_module(&mut self) {
        debug_assert_eq!(self.scopes.len(), 1, "end_of_module is reachable only at top level");

        {
            let current = self.scopes.module_scope_mut();
            propagate_uses(current, &mut self.global_scope, false, false, &mut self.sink);
        }

        let typeof_shielded: Vec<Identifier> = self
            .global_scope
            .variables_used
            .iter()
            .chain(self.global_scope.variables_used_in_descendant_scope.iter())
            .filter(|used| used.kind == UsedVariableKind::Typeof)
            .map(|used| used.name.clone())
            .collect();

        let pending = std::mem::take(&mut self.global_scope.variables_used);
        for used in pending {
            if is_declared_or_typeof_shielded(&self.global_scope.declared_variables, &typeof_shielded, &used.name) {
                continue;
            }
            match used.kind {
                UsedVariableKind::Assignment => {
                    self.sink.report(Diagnostic::AssignmentToUndeclaredVariable { name: used.name });
                }
                UsedVariableKind::Use | UsedVariableKind::Export => {
                    self.sink.report(Diagnostic::UseOfUndeclaredVariable { name: used.name });
                }
                UsedVariableKind::Typeof => {}
            }
        }

        // Unlike `variables_used` above, the typeof shield does not apply
        // here: a use that already crossed a function boundary is reported
        // regardless of kind, a bare `typeof` included. This is the one
        // asymmetry carried over unchanged from the propagation model.
        let pending_descendant = std::mem::take(&mut self.global_scope.variables_used_in_descendant_scope);
        for used in pending_descendant {
            if self.global_scope.declared_variables.find(&used.name).is_some() {
                continue;
            }
            match used.kind {
                UsedVariableKind::Assignment => {
                    self.sink.report(Diagnostic::AssignmentToUndeclaredVariable { name: used.name });
                }
                UsedVariableKind::Use | UsedVariableKind::Export | UsedVariableKind::Typeof => {
                    self.sink.report(Diagnostic::UseOfUndeclaredVariable { name: used.name });
                }
            }
        }
    }
}

fn is_declared_or_typeof_shielded(
    declared: &DeclaredVariableSet,
    typeof_shielded: &[Identifier],
    name: &Identifier,
) -> bool {
    declared.find(name).is_some()
        || typeof_shielded.iter().any(|shielded| shielded.normalized_name() == name.normalized_name())
}

/// Declares `name` in `scope`, reporting a redeclaration conflict if one
/// exists, then resolves any pending uses in `scope` that were waiting on it
/// (§4.3).
fn declare_variable(
    scope: &mut Scope,
    name: Identifier,
    kind: VariableKind,
    origin: DeclaredVariableOrigin,
    sink: &mut impl DiagnosticSink,
) {
    check_redeclaration_conflict(&scope.declared_variables, &name, kind, origin, sink);
    scope.declared_variables.add_variable_declaration(name.clone(), kind, origin);
    resolve_pending_same_scope_uses(scope, &name, kind, origin, sink);
    resolve_pending_descendant_scope_uses(scope, &name, kind, sink);
}

/// Records a plain use (or assignment, or `typeof`, or export) against the
/// current scope, resolving it immediately if already declared (§4.4).
fn use_variable(scope: &mut Scope, name: Identifier, kind: UsedVariableKind, sink: &mut impl DiagnosticSink) {
    if let Some(declared) = scope.declared_variables.find(&name) {
        if kind == UsedVariableKind::Assignment {
            check_assignment_legality(declared.kind(), declared.is_global(), declared.name(), &name, false, sink);
        }
        return;
    }
    scope.variables_used.push(UsedVariable::new(name, kind));
}

/// The redeclaration-legality table (§4.5): most same-kind or
/// hoist/parameter combinations are fine; everything else is a conflict.
fn check_redeclaration_conflict(
    existing: &DeclaredVariableSet,
    name: &Identifier,
    new_kind: VariableKind,
    new_origin: DeclaredVariableOrigin,
    sink: &mut impl DiagnosticSink,
) {
    let Some(old) = existing.find(name) else { return };
    let old_kind = old.kind();

    use VariableKind::*;
    match old_kind {
        Catch => debug_assert!(!matches!(new_kind, Import | Parameter)),
        Class | Const | Function | Let | Var => debug_assert!(!matches!(new_kind, Catch | Parameter)),
        Parameter => debug_assert!(!matches!(new_kind, Catch | Import)),
        Import => {}
    }

    let redeclaration_ok = matches!(
        (old_kind, new_kind),
        (Function, Parameter)
            | (Function, Function)
            | (Parameter, Function)
            | (Var, Function)
            | (Parameter, Parameter)
            | (Catch, Var)
            | (Function, Var)
            | (Parameter, Var)
            | (Var, Var)
    ) || (old_kind == Function && old.origin() == DeclaredVariableOrigin::DescendantScope)
        || (new_kind == Function && new_origin == DeclaredVariableOrigin::DescendantScope);

    if redeclaration_ok {
        return;
    }

    if old.is_global() {
        sink.report(Diagnostic::RedeclarationOfGlobalVariable { redeclaration: name.clone() });
    } else {
        sink.report(Diagnostic::RedeclarationOfVariable {
            redeclaration:        name.clone(),
            original_declaration: old.name().clone(),
        });
    }
}

/// The assignment-legality table (§4.6): `const`/`import` bindings never
/// accept assignment; everything else only complains about assignment
/// before its own declaration.
fn check_assignment_legality(
    kind: VariableKind,
    is_global: bool,
    declaration: &Identifier,
    assignment: &Identifier,
    is_assigned_before_declaration: bool,
    sink: &mut impl DiagnosticSink,
) {
    match kind {
        VariableKind::Const | VariableKind::Import => {
            if is_global {
                sink.report(Diagnostic::AssignmentToConstGlobalVariable { assignment: assignment.clone() });
            } else if is_assigned_before_declaration {
                sink.report(Diagnostic::AssignmentToConstVariableBeforeItsDeclaration {
                    declaration: declaration.clone(),
                    assignment:  assignment.clone(),
                    kind,
                });
            } else {
                sink.report(Diagnostic::AssignmentToConstVariable {
                    declaration: declaration.clone(),
                    assignment:  assignment.clone(),
                    kind,
                });
            }
        }
        VariableKind::Catch
        | VariableKind::Class
        | VariableKind::Function
        | VariableKind::Let
        | VariableKind::Parameter
        | VariableKind::Var => {
            if is_assigned_before_declaration {
                sink.report(Diagnostic::AssignmentBeforeVariableDeclaration {
                    assignment:  assignment.clone(),
                    declaration: declaration.clone(),
                });
            }
        }
    }
}

/// Removes pending uses in `scope.variables_used` that match the just-added
/// declaration, reporting use-before-declaration where the declared kind
/// requires it.
fn resolve_pending_same_scope_uses(
    scope: &mut Scope,
    declared_name: &Identifier,
    declared_kind: VariableKind,
    declared_origin: DeclaredVariableOrigin,
    sink: &mut impl DiagnosticSink,
) {
    let pending = std::mem::take(&mut scope.variables_used);
    for used in pending {
        if used.name.normalized_name() != declared_name.normalized_name() {
            scope.variables_used.push(used);
            continue;
        }

        if declared_kind == VariableKind::Function
            && declared_origin == DeclaredVariableOrigin::DescendantScope
            && used.kind == UsedVariableKind::Use
        {
            sink.report(Diagnostic::FunctionCallBeforeDeclarationInBlockedScope {
                use_site:    used.name,
                declaration: declared_name.clone(),
            });
            continue;
        }

        if matches!(declared_kind, VariableKind::Class | VariableKind::Const | VariableKind::Let) {
            match used.kind {
                UsedVariableKind::Assignment => {
                    check_assignment_legality(declared_kind, false, declared_name, &used.name, true, sink);
                }
                UsedVariableKind::Use | UsedVariableKind::Typeof => {
                    sink.report(Diagnostic::VariableUsedBeforeDeclaration {
                        use_site:    used.name,
                        declaration: declared_name.clone(),
                    });
                }
                UsedVariableKind::Export => {}
            }
        }
    }
}

/// Same as above but for uses that crossed into a descendant scope: these
/// are never use-before-declaration errors, only possible illegal
/// assignments (a closure calling back into an outer `const` before it runs).
fn resolve_pending_descendant_scope_uses(
    scope: &mut Scope,
    declared_name: &Identifier,
    declared_kind: VariableKind,
    sink: &mut impl DiagnosticSink,
) {
    let pending = std::mem::take(&mut scope.variables_used_in_descendant_scope);
    for used in pending {
        if used.name.normalized_name() != declared_name.normalized_name() {
            scope.variables_used_in_descendant_scope.push(used);
            continue;
        }
        if used.kind == UsedVariableKind::Assignment {
            check_assignment_legality(declared_kind, false, declared_name, &used.name, false, sink);
        }
    }
}

/// Moves everything still pending in `current` into `parent`, resolving
/// against `parent`'s declarations where possible (§4.7). `allow_use_before_declaration`
/// routes unresolved plain uses into the lenient descendant list rather than
/// the same-scope list; `consume_arguments` treats a bare `arguments` use as
/// already resolved (every function scope implicitly binds it).
fn propagate_uses(
    current: &mut Scope,
    parent: &mut Scope,
    allow_use_before_declaration: bool,
    consume_arguments: bool,
    sink: &mut impl DiagnosticSink,
) {
    let pending = std::mem::take(&mut current.variables_used);
    for used in pending {
        debug_assert!(current.declared_variables.find(&used.name).is_none());

        if let Some(declared) = parent.declared_variables.find(&used.name) {
            if used.kind == UsedVariableKind::Assignment {
                check_assignment_legality(declared.kind(), declared.is_global(), declared.name(), &used.name, false, sink);
            }
        } else if consume_arguments && used.name.normalized_name() == "arguments" {
            // Implicitly bound by every function; nothing left to resolve.
        } else if current.is_function_expression_self_name(&used.name) {
            // Resolved by the function expression's own visible name.
        } else if allow_use_before_declaration {
            parent.variables_used_in_descendant_scope.push(used);
        } else {
            parent.variables_used.push(used);
        }
    }

    let pending_descendant = std::mem::take(&mut current.variables_used_in_descendant_scope);
    for used in pending_descendant {
        if let Some(declared) = parent.declared_variables.find(&used.name) {
            if used.kind == UsedVariableKind::Assignment {
                check_assignment_legality(declared.kind(), declared.is_global(), declared.name(), &used.name, false, sink);
            }
        } else if current.is_function_expression_self_name(&used.name) {
            // Resolved by the function expression's own visible name.
        } else {
            parent.variables_used_in_descendant_scope.push(used);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::diagnostics::CollectingSink;

    fn span_name(name: &str) -> Identifier {
        Identifier::new(name, crate::analyzer::identifier::Span::new(0, name.len() as u32))
    }

    fn analyzer() -> ScopeAnalyzer<CollectingSink> {
        ScopeAnalyzer::new(CollectingSink::new())
    }

    mod declaration_and_use {
        use super::*;

        #[test]
        fn use_after_declaration_is_clean() {
            let mut a = analyzer();
            a.variable_declaration(span_name("x"), VariableKind::Let);
            a.variable_use(span_name("x"));
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }

        #[test]
        fn use_of_undeclared_variable_is_reported_at_end_of_module() {
            let mut a = analyzer();
            a.variable_use(span_name("ghost"));
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::UseOfUndeclaredVariable { .. }));
        }

        #[test]
        fn let_used_before_declaration_in_same_scope_is_reported() {
            let mut a = analyzer();
            a.variable_use(span_name("x"));
            a.variable_declaration(span_name("x"), VariableKind::Let);
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::VariableUsedBeforeDeclaration { .. }));
        }

        #[test]
        fn var_used_before_declaration_in_same_scope_is_silent() {
            let mut a = analyzer();
            a.variable_use(span_name("x"));
            a.variable_declaration(span_name("x"), VariableKind::Var);
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }

        #[test]
        fn predefined_global_use_needs_no_declaration() {
            let mut a = analyzer();
            a.variable_use(span_name("Math"));
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }
    }

    mod redeclaration {
        use super::*;

        #[test]
        fn two_lets_conflict() {
            let mut a = analyzer();
            a.variable_declaration(span_name("x"), VariableKind::Let);
            a.variable_declaration(span_name("x"), VariableKind::Let);
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::RedeclarationOfVariable { .. }));
        }

        #[test]
        fn function_then_parameter_is_allowed() {
            let mut a = analyzer();
            a.variable_declaration(span_name("x"), VariableKind::Function);
            a.variable_declaration(span_name("x"), VariableKind::Parameter);
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }

        #[test]
        fn redeclaring_a_predeclared_module_binding_is_reported_as_global_conflict() {
            let mut a = analyzer();
            a.variable_declaration(span_name("require"), VariableKind::Let);
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::RedeclarationOfGlobalVariable { .. }));
        }
    }

    mod assignment {
        use super::*;

        #[test]
        fn assigning_a_const_is_reported() {
            let mut a = analyzer();
            a.variable_declaration(span_name("x"), VariableKind::Const);
            a.variable_assignment(span_name("x"));
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::AssignmentToConstVariable { .. }));
        }

        #[test]
        fn assigning_a_const_before_its_declaration_gets_the_before_declaration_variant() {
            let mut a = analyzer();
            a.variable_assignment(span_name("x"));
            a.variable_declaration(span_name("x"), VariableKind::Const);
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::AssignmentToConstVariableBeforeItsDeclaration { .. }));
        }

        #[test]
        fn assigning_a_predefined_const_global_is_a_distinct_diagnostic() {
            let mut a = analyzer();
            a.variable_assignment(span_name("undefined"));
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::AssignmentToConstGlobalVariable { .. }));
        }

        #[test]
        fn assigning_a_let_before_its_declaration_is_reported() {
            let mut a = analyzer();
            a.variable_assignment(span_name("x"));
            a.variable_declaration(span_name("x"), VariableKind::Let);
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::AssignmentBeforeVariableDeclaration { .. }));
        }

        #[test]
        fn assigning_a_var_before_its_declaration_is_silent() {
            let mut a = analyzer();
            a.variable_assignment(span_name("x"));
            a.variable_declaration(span_name("x"), VariableKind::Var);
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }
    }

    mod scopes {
        use super::*;

        #[test]
        fn var_declared_in_a_block_is_visible_after_the_block_exits() {
            let mut a = analyzer();
            a.enter_block_scope();
            a.variable_declaration(span_name("x"), VariableKind::Var);
            a.exit_block_scope();
            a.variable_use(span_name("x"));
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }

        #[test]
        fn let_declared_in_a_block_is_not_visible_after_the_block_exits() {
            let mut a = analyzer();
            a.enter_block_scope();
            a.variable_declaration(span_name("x"), VariableKind::Let);
            a.exit_block_scope();
            a.variable_use(span_name("x"));
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::UseOfUndeclaredVariable { .. }));
        }

        #[test]
        fn calling_a_block_scoped_function_before_the_block_runs_is_reported() {
            let mut a = analyzer();
            a.variable_use(span_name("f"));
            a.enter_block_scope();
            a.variable_declaration(span_name("f"), VariableKind::Function);
            a.exit_block_scope();
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::FunctionCallBeforeDeclarationInBlockedScope { .. }));
        }

        #[test]
        fn use_inside_a_nested_function_resolves_against_the_enclosing_scope() {
            let mut a = analyzer();
            a.variable_declaration(span_name("x"), VariableKind::Let);
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.variable_use(span_name("x"));
            a.exit_function_scope();
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }

        #[test]
        fn use_inside_a_nested_function_of_a_variable_declared_afterward_is_allowed() {
            // A closure may be called after the surrounding scope finishes
            // initializing, so this is not a use-before-declaration error.
            let mut a = analyzer();
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.variable_use(span_name("later"));
            a.exit_function_scope();
            a.variable_declaration(span_name("later"), VariableKind::Let);
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }

        #[test]
        fn named_function_expression_self_name_is_visible_only_inside_its_own_scope() {
            let mut a = analyzer();
            a.enter_named_function_scope(span_name("recurse"));
            a.enter_function_scope_body();
            a.variable_use(span_name("recurse"));
            a.exit_function_scope();
            a.variable_use(span_name("recurse"));
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::UseOfUndeclaredVariable { .. }));
        }

        #[test]
        fn arguments_is_implicitly_bound_in_every_function() {
            let mut a = analyzer();
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.variable_use(span_name("arguments"));
            a.exit_function_scope();
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }

        #[test]
        fn class_scope_hoists_nothing_to_its_parent() {
            let mut a = analyzer();
            a.enter_class_scope();
            a.variable_declaration(span_name("Field"), VariableKind::Class);
            a.exit_class_scope();
            a.variable_use(span_name("Field"));
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::UseOfUndeclaredVariable { .. }));
        }
    }

    mod typeof_shield {
        use super::*;

        #[test]
        fn typeof_of_an_undeclared_variable_in_the_same_scope_is_silent() {
            let mut a = analyzer();
            a.variable_typeof_use(span_name("maybeDefined"));
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }

        #[test]
        fn typeof_of_a_variable_used_in_a_descendant_scope_still_reports() {
            // Once a use has crossed a function boundary it is no longer
            // eligible for the typeof guard, mirroring the asymmetry between
            // the two pending-use lists at end of module.
            let mut a = analyzer();
            a.enter_function_scope();
            a.enter_function_scope_body();
            a.variable_typeof_use(span_name("maybeDefined"));
            a.exit_function_scope();
            a.end_of_module();
            let diagnostics = a.into_sink().into_diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(matches!(diagnostics[0], Diagnostic::UseOfUndeclaredVariable { .. }));
        }

        #[test]
        fn a_later_plain_use_is_shielded_by_an_earlier_typeof_of_the_same_name() {
            let mut a = analyzer();
            a.variable_typeof_use(span_name("maybeDefined"));
            a.variable_use(span_name("maybeDefined"));
            a.end_of_module();
            assert!(a.into_sink().diagnostics().is_empty());
        }
    }
}
