//! # Driver
//!
//! A thin, mechanical AST walk translating a parsed [`crate::parser::ast_types::Program`]
//! into calls against [`crate::analyzer::ScopeAnalyzer`]'s event interface. The
//! driver owns no scope state of its own: it never looks a name up, never
//! remembers what it has declared, and never decides whether a use is legal.
//! Every one of those decisions belongs to the analyzer; the driver's only job
//! is walking the tree in source order and calling the right event at the
//! right time.
//!
//! The walk shape (hoist pre-pass over a function/module body, then a single
//! statement-by-statement descent) mirrors the way the teacher crate used to
//! build its scope tree, with the tree-building replaced by event calls.

use crate::analyzer::{DiagnosticSink, Identifier, ScopeAnalyzer, Span, VariableKind};
use crate::parser::ast_types::{
    ArrowFunctionBody, BlockStatement, ClassBody, ClassElement, Expression, ForInOfLeft, ForInit, FunctionExpression,
    ObjectPatternProperty, ObjectProperty, Pattern, Program, PropertyKey, Statement, UnaryOperator, VariableDeclarationKind,
    VariableDeclarator,
};


/// Runs a fresh [`ScopeAnalyzer`] over `program`, reporting everything through
/// `sink`.
pub fn analyze_program<S: DiagnosticSink>(program: &Program, sink: S) -> S {
    let mut analyzer = ScopeAnalyzer::new(sink);
    hoist_statements(&mut analyzer, &program.body);
    for statement in &program.body {
        walk_statement(&mut analyzer, statement);
    }
    analyzer.end_of_module();
    analyzer.into_sink()
}

fn identifier(ast_id: &crate::parser::ast_types::Identifier) -> Identifier {
    Identifier::new(ast_id.name.clone(), Span::new(ast_id.start, ast_id.end))
}

/// Declares every `var` and function directly in `body`'s own statement list
/// before that body is walked, matching JS hoisting. Deliberately does not
/// descend into nested blocks, conditionals, or loops: those get their own
/// scope and hoist their `var`/`function` declarations up to this one only
/// when that nested scope exits, through the propagation engine (the second
/// declaration this produces, once the normal walk reaches it, is always a
/// legal same-kind redeclaration).
fn hoist_statements<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, body: &[Statement]) {
    for statement in body {
        match statement {
            Statement::VariableDeclaration { declarations, kind: VariableDeclarationKind::Var } => {
                for declarator in declarations {
                    for name in pattern_bound_names(&declarator.id) {
                        analyzer.variable_declaration(name, VariableKind::Var);
                    }
                }
            }
            Statement::FunctionDeclaration { id: Some(id), .. } => {
                analyzer.variable_declaration(identifier(id), VariableKind::Function);
            }
            _ => {}
        }
    }
}

/// Every identifier a pattern binds, left to right (destructuring defaults
/// may contain expressions but never new bindings of their own).
fn pattern_bound_names(pattern: &Pattern) -> Vec<Identifier> {
    let mut names = Vec::new();
    collect_pattern_names(pattern, &mut names);
    names
}

fn collect_pattern_names(pattern: &Pattern, out: &mut Vec<Identifier>) {
    match pattern {
        Pattern::Identifier(id) => out.push(identifier(id)),
        Pattern::ArrayPattern { elements } => {
            for element in elements.iter().flatten() {
                collect_pattern_names(element, out);
            }
        }
        Pattern::ObjectPattern { properties } => {
            for property in properties {
                match property {
                    ObjectPatternProperty::Property { value, .. } => collect_pattern_names(value, out),
                    ObjectPatternProperty::RestElement { argument } => collect_pattern_names(argument, out),
                }
            }
        }
        Pattern::AssignmentPattern { left, .. } => collect_pattern_names(left, out),
        Pattern::RestElement { argument } => collect_pattern_names(argument, out),
        Pattern::Member { .. } => {}
    }
}

fn walk_statement<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, statement: &Statement) {
    match statement {
        Statement::VariableDeclaration { declarations, kind } => {
            let variable_kind = match kind {
                VariableDeclarationKind::Var => VariableKind::Var,
                VariableDeclarationKind::Let => VariableKind::Let,
                VariableDeclarationKind::Const => VariableKind::Const,
            };
            for declarator in declarations {
                walk_declarator(analyzer, declarator, variable_kind);
            }
        }
        Statement::FunctionDeclaration { id, params, body, .. } => {
            // Declaring again here is a harmless same-kind redeclaration when
            // the enclosing hoist pre-pass already covered this statement (it
            // only scans its own body's direct statement list); it is the
            // only declaration this function gets when nested in a block,
            // where it is picked up by that block's own scope-exit hoist.
            if let Some(id) = id {
                analyzer.variable_declaration(identifier(id), VariableKind::Function);
            }
            analyzer.enter_function_scope();
            walk_function_body(analyzer, params, body);
            analyzer.exit_function_scope();
        }
        Statement::ClassDeclaration { id, super_class, body } => {
            if let Some(id) = id {
                analyzer.variable_declaration(identifier(id), VariableKind::Class);
            }
            if let Some(super_class) = super_class {
                walk_expression(analyzer, super_class);
            }
            walk_class_body(analyzer, body);
        }
        Statement::ExpressionStatement { expression } => walk_expression(analyzer, expression),
        Statement::BlockStatement { body } => {
            analyzer.enter_block_scope();
            for statement in body {
                walk_statement(analyzer, statement);
            }
            analyzer.exit_block_scope();
        }
        Statement::ReturnStatement { argument } => {
            if let Some(argument) = argument {
                walk_expression(analyzer, argument);
            }
        }
        Statement::IfStatement { test, consequent, alternate } => {
            walk_expression(analyzer, test);
            walk_statement(analyzer, consequent);
            if let Some(alternate) = alternate {
                walk_statement(analyzer, alternate);
            }
        }
        Statement::WhileStatement { test, body } => {
            walk_expression(analyzer, test);
            walk_statement(analyzer, body);
        }
        Statement::DoWhileStatement { body, test } => {
            walk_statement(analyzer, body);
            walk_expression(analyzer, test);
        }
        Statement::ForStatement { init, test, update, body } => {
            analyzer.enter_for_scope();
            if let Some(init) = init {
                match init {
                    ForInit::VariableDeclaration { declarations, kind } => {
                        let variable_kind = match kind {
                            VariableDeclarationKind::Var => VariableKind::Var,
                            VariableDeclarationKind::Let => VariableKind::Let,
                            VariableDeclarationKind::Const => VariableKind::Const,
                        };
                        for declarator in declarations {
                            walk_declarator(analyzer, declarator, variable_kind);
                        }
                    }
                    ForInit::Expression(expr) => walk_expression(analyzer, expr),
                }
            }
            if let Some(test) = test {
                walk_expression(analyzer, test);
            }
            if let Some(update) = update {
                walk_expression(analyzer, update);
            }
            walk_statement(analyzer, body);
            analyzer.exit_for_scope();
        }
        Statement::ForInStatement { left, right, body } | Statement::ForOfStatement { left, right, body } => {
            let needs_scope = matches!(left, ForInOfLeft::VariableDeclaration { kind, .. } if !matches!(kind, VariableDeclarationKind::Var));
            if needs_scope {
                analyzer.enter_for_scope();
            }
            match left {
                ForInOfLeft::VariableDeclaration { id, kind } => {
                    let variable_kind = match kind {
                        VariableDeclarationKind::Var => VariableKind::Var,
                        VariableDeclarationKind::Let => VariableKind::Let,
                        VariableDeclarationKind::Const => VariableKind::Const,
                    };
                    for name in pattern_bound_names(id) {
                        analyzer.variable_declaration(name, variable_kind);
                    }
                }
                ForInOfLeft::AssignmentTarget(pattern) => walk_assignment_target(analyzer, pattern),
            }
            walk_expression(analyzer, right);
            walk_statement(analyzer, body);
            if needs_scope {
                analyzer.exit_for_scope();
            }
        }
        Statement::TryStatement { block, handler, finally } => {
            analyzer.enter_block_scope();
            for statement in &block.body {
                walk_statement(analyzer, statement);
            }
            analyzer.exit_block_scope();
            if let Some(handler) = handler {
                walk_catch_clause(analyzer, handler);
            }
            if let Some(finally) = finally {
                analyzer.enter_block_scope();
                for statement in &finally.body {
                    walk_statement(analyzer, statement);
                }
                analyzer.exit_block_scope();
            }
        }
        Statement::SwitchStatement { discriminant, cases } => {
            walk_expression(analyzer, discriminant);
            analyzer.enter_block_scope();
            for case in cases {
                if let Some(test) = &case.test {
                    walk_expression(analyzer, test);
                }
                for statement in &case.consequent {
                    walk_statement(analyzer, statement);
                }
            }
            analyzer.exit_block_scope();
        }
        Statement::ThrowStatement { argument } => walk_expression(analyzer, argument),
        Statement::BreakStatement { .. } | Statement::ContinueStatement { .. } | Statement::EmptyStatement => {}
        Statement::LabeledStatement { body, .. } => walk_statement(analyzer, body),
        Statement::ImportDeclaration { specifiers, .. } => {
            for specifier in specifiers {
                use crate::parser::ast_types::ImportSpecifier::*;
                let local = match specifier {
                    ImportDefaultSpecifier { local } | ImportNamespaceSpecifier { local } | ImportSpecifier { local, .. } => local,
                };
                analyzer.variable_declaration(identifier(local), VariableKind::Import);
            }
        }
        Statement::ExportNamedDeclaration { declaration, specifiers, .. } => {
            if let Some(declaration) = declaration {
                walk_statement(analyzer, declaration);
            }
            for specifier in specifiers {
                use crate::parser::ast_types::ExportSpecifier::*;
                let ExportSpecifier { local, .. } = specifier;
                analyzer.variable_export_use(identifier(local));
            }
        }
    }
}

/// `catch (param) { ... }` declares `param` (if present) directly into the
/// block scope the handler body shares, not a nested scope of its own.
fn walk_catch_clause<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, handler: &crate::parser::ast_types::CatchClause) {
    analyzer.enter_block_scope();
    if let Some(param) = &handler.param {
        for name in pattern_bound_names(param) {
            analyzer.variable_declaration(name, VariableKind::Catch);
        }
    }
    for statement in &handler.body.body {
        walk_statement(analyzer, statement);
    }
    analyzer.exit_block_scope();
}

/// Declares every name bound by `declarator.id`, walking its default-value
/// expressions (if any) first so identifiers used in a default are recorded
/// as uses before the binding they default into is declared.
fn walk_declarator<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, declarator: &VariableDeclarator, kind: VariableKind) {
    walk_pattern_defaults(analyzer, &declarator.id);
    if let Some(init) = &declarator.init {
        walk_expression(analyzer, init);
    }
    for name in pattern_bound_names(&declarator.id) {
        analyzer.variable_declaration(name, kind);
    }
}

/// Walks the expressions embedded in a pattern's defaults (`{a = foo()}`)
/// without declaring anything, honoring left-to-right evaluation order ahead
/// of the declarations themselves.
fn walk_pattern_defaults<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, pattern: &Pattern) {
    match pattern {
        Pattern::Identifier(_) | Pattern::Member { .. } => {}
        Pattern::ArrayPattern { elements } => {
            for element in elements.iter().flatten() {
                walk_pattern_defaults(analyzer, element);
            }
        }
        Pattern::ObjectPattern { properties } => {
            for property in properties {
                match property {
                    ObjectPatternProperty::Property { value, .. } => walk_pattern_defaults(analyzer, value),
                    ObjectPatternProperty::RestElement { argument } => walk_pattern_defaults(analyzer, argument),
                }
            }
        }
        Pattern::AssignmentPattern { left, right } => {
            walk_expression(analyzer, right);
            walk_pattern_defaults(analyzer, left);
        }
        Pattern::RestElement { argument } => walk_pattern_defaults(analyzer, argument),
    }
}

fn walk_class_body<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, body: &ClassBody) {
    analyzer.enter_class_scope();
    for element in &body.body {
        match element {
            ClassElement::PropertyDefinition { key, value, .. } => {
                walk_property_key(analyzer, key);
                if let Some(value) = value {
                    walk_expression(analyzer, value);
                }
            }
            ClassElement::MethodDefinition { key, value, .. } => {
                walk_property_key(analyzer, key);
                walk_function_expression(analyzer, value);
            }
        }
    }
    analyzer.exit_class_scope();
}

fn walk_property_key<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, key: &PropertyKey) {
    if let PropertyKey::Computed(expr) = key {
        walk_expression(analyzer, expr);
    }
}

/// Walks an (already scope-entered) function body: hoists its own
/// var/function declarations, declares its parameters, then walks the body.
fn walk_function_body<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, params: &[Pattern], body: &BlockStatement) {
    for param in params {
        for name in pattern_bound_names(param) {
            analyzer.variable_declaration(name, VariableKind::Parameter);
        }
    }
    analyzer.enter_function_scope_body();
    hoist_statements(analyzer, &body.body);
    for statement in &body.body {
        walk_statement(analyzer, statement);
    }
}

fn walk_function_expression<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, func: &FunctionExpression) {
    match &func.id {
        Some(id) => analyzer.enter_named_function_scope(identifier(id)),
        None => analyzer.enter_function_scope(),
    }
    walk_function_body(analyzer, &func.params, &func.body);
    analyzer.exit_function_scope();
}

fn walk_expression<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, expr: &Expression) {
    match expr {
        Expression::Identifier(id) => analyzer.variable_use(identifier(id)),
        Expression::ThisExpression | Expression::Literal(_) => {}
        Expression::BinaryExpression { left, right, .. } => {
            walk_expression(analyzer, left);
            walk_expression(analyzer, right);
        }
        Expression::UnaryExpression { operator: UnaryOperator::Typeof, argument } => match argument.as_ref() {
            Expression::Identifier(id) => analyzer.variable_typeof_use(identifier(id)),
            other => walk_expression(analyzer, other),
        },
        Expression::UnaryExpression { argument, .. } => walk_expression(analyzer, argument),
        Expression::AssignmentExpression { left, operator: _, right } => {
            walk_expression(analyzer, right);
            walk_assignment_target(analyzer, left);
        }
        Expression::UpdateExpression { argument, .. } => walk_assignment_target_expression(analyzer, argument),
        Expression::CallExpression { callee, arguments } | Expression::NewExpression { callee, arguments } => {
            walk_expression(analyzer, callee);
            for argument in arguments {
                walk_expression(analyzer, argument);
            }
        }
        Expression::MemberExpression { object, property, computed } => {
            walk_expression(analyzer, object);
            if *computed {
                walk_expression(analyzer, property);
            }
        }
        Expression::FunctionExpression(func) => walk_function_expression(analyzer, func),
        Expression::ArrowFunctionExpression { params, body, .. } => {
            analyzer.enter_function_scope();
            for param in params {
                for name in pattern_bound_names(param) {
                    analyzer.variable_declaration(name, VariableKind::Parameter);
                }
            }
            analyzer.enter_function_scope_body();
            match body {
                ArrowFunctionBody::Expression(expr) => walk_expression(analyzer, expr),
                ArrowFunctionBody::BlockStatement(block) => {
                    hoist_statements(analyzer, &block.body);
                    for statement in &block.body {
                        walk_statement(analyzer, statement);
                    }
                }
            }
            analyzer.exit_function_scope();
        }
        Expression::ObjectExpression { properties } => {
            for property in properties {
                match property {
                    ObjectProperty::Property { key, value, .. } => {
                        walk_property_key(analyzer, key);
                        walk_expression(analyzer, value);
                    }
                    ObjectProperty::SpreadElement { argument } => walk_expression(analyzer, argument),
                }
            }
        }
        Expression::ArrayExpression { elements } => {
            for element in elements.iter().flatten() {
                walk_expression(analyzer, element);
            }
        }
        Expression::TemplateLiteral { expressions, .. } => {
            for expr in expressions {
                walk_expression(analyzer, expr);
            }
        }
        Expression::ConditionalExpression { test, consequent, alternate } => {
            walk_expression(analyzer, test);
            walk_expression(analyzer, consequent);
            walk_expression(analyzer, alternate);
        }
        Expression::SequenceExpression { expressions } => {
            for expr in expressions {
                walk_expression(analyzer, expr);
            }
        }
        Expression::AwaitExpression { argument } => walk_expression(analyzer, argument),
        Expression::YieldExpression { argument } => {
            if let Some(argument) = argument {
                walk_expression(analyzer, argument);
            }
        }
    }
}

/// An update expression (`x++`) only ever targets an identifier or member
/// expression, represented directly as an `Expression` rather than a
/// `Pattern` (OXC's own `SimpleAssignmentTarget` shape).
fn walk_assignment_target_expression<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, target: &Expression) {
    match target {
        Expression::Identifier(id) => analyzer.variable_assignment(identifier(id)),
        Expression::MemberExpression { object, property, computed } => {
            walk_expression(analyzer, object);
            if *computed {
                walk_expression(analyzer, property);
            }
        }
        other => walk_expression(analyzer, other),
    }
}

/// Declares nothing; reports a `variable_assignment` for every identifier a
/// destructuring assignment target binds (member-expression targets are
/// walked as reads of their object/property, never as declarations).
fn walk_assignment_target<S: DiagnosticSink>(analyzer: &mut ScopeAnalyzer<S>, target: &Pattern) {
    match target {
        Pattern::Identifier(id) => analyzer.variable_assignment(identifier(id)),
        Pattern::Member { object, property, computed } => {
            walk_expression(analyzer, object);
            if *computed {
                walk_expression(analyzer, property);
            }
        }
        Pattern::ArrayPattern { elements } => {
            for element in elements.iter().flatten() {
                walk_assignment_target(analyzer, element);
            }
        }
        Pattern::ObjectPattern { properties } => {
            for property in properties {
                match property {
                    ObjectPatternProperty::Property { value, .. } => walk_assignment_target(analyzer, value),
                    ObjectPatternProperty::RestElement { argument } => walk_assignment_target(analyzer, argument),
                }
            }
        }
        Pattern::AssignmentPattern { left, right } => {
            walk_expression(analyzer, right);
            walk_assignment_target(analyzer, left);
        }
        Pattern::RestElement { argument } => walk_assignment_target(analyzer, argument),
    }
}
