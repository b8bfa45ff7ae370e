//! # Parser Tests
//!
//! Tests organized by category: valid inputs exercising each AST shape the
//! analyzer's driver depends on, edge cases in OXC's own grammar handling,
//! and trivia preservation.

#[cfg(test)]
mod tests {
    use crate::parser::ast_types::*;
    use crate::parser::{parse_js, ParserConfig};

    fn assert_parse_success(source: &str) -> Program {
        let result = parse_js(source, "test.js", &ParserConfig::default());
        assert!(result.errors.is_empty(), "expected successful parsing but got errors: {:?}", result.errors);
        result.ast.expect("no errors implies an ast")
    }

    mod valid_inputs {
        use super::*;

        #[test]
        fn variable_declaration_with_initializer() {
            let ast = assert_parse_success("let x = 5;");
            assert_eq!(ast.body.len(), 1);
            match &ast.body[0] {
                Statement::VariableDeclaration { declarations, kind } => {
                    assert!(matches!(kind, VariableDeclarationKind::Let));
                    assert_eq!(declarations.len(), 1);
                    match &declarations[0].id {
                        Pattern::Identifier(id) => assert_eq!(id.name, "x"),
                        _ => panic!("expected identifier pattern"),
                    }
                    match declarations[0].init.as_ref().unwrap() {
                        Expression::Literal(Literal::Number(num)) => assert_eq!(num.value, 5.0),
                        _ => panic!("expected number literal"),
                    }
                }
                _ => panic!("expected variable declaration"),
            }
        }

        #[test]
        fn function_declaration_with_parameters_and_return() {
            let ast = assert_parse_success("function add(a, b) { return a + b; }");
            match &ast.body[0] {
                Statement::FunctionDeclaration { id, params, body, .. } => {
                    assert_eq!(id.as_ref().unwrap().name, "add");
                    assert_eq!(params.len(), 2);
                    assert_eq!(body.body.len(), 1);
                    match &body.body[0] {
                        Statement::ReturnStatement { argument: Some(Expression::BinaryExpression { operator, .. }) } => {
                            assert!(matches!(operator, BinaryOperator::Add));
                        }
                        _ => panic!("expected a binary-expression return"),
                    }
                }
                _ => panic!("expected function declaration"),
            }
        }

        #[test]
        fn assignment_expression_is_converted() {
            let ast = assert_parse_success("x = 1;");
            match &ast.body[0] {
                Statement::ExpressionStatement { expression: Expression::AssignmentExpression { left, .. } } => {
                    assert!(matches!(left.as_ref(), Pattern::Identifier(_)));
                }
                _ => panic!("expected assignment expression"),
            }
        }

        #[test]
        fn arrow_function_expression_body() {
            let ast = assert_parse_success("const double = (n) => n * 2;");
            match &ast.body[0] {
                Statement::VariableDeclaration { declarations, .. } => match declarations[0].init.as_ref().unwrap() {
                    Expression::ArrowFunctionExpression { params, body, .. } => {
                        assert_eq!(params.len(), 1);
                        assert!(matches!(body, ArrowFunctionBody::Expression(_)));
                    }
                    _ => panic!("expected arrow function expression"),
                },
                _ => panic!("expected variable declaration"),
            }
        }

        #[test]
        fn member_expression_chains() {
            let ast = assert_parse_success("a.b.c;");
            match &ast.body[0] {
                Statement::ExpressionStatement { expression: Expression::MemberExpression { object, .. } } => {
                    assert!(matches!(object.as_ref(), Expression::MemberExpression { .. }));
                }
                _ => panic!("expected member expression"),
            }
        }

        #[test]
        fn object_and_array_destructuring_pattern() {
            let ast = assert_parse_success("const { a, b: [c, d] } = obj;");
            match &ast.body[0] {
                Statement::VariableDeclaration { declarations, .. } => match &declarations[0].id {
                    Pattern::ObjectPattern { properties } => assert_eq!(properties.len(), 2),
                    _ => panic!("expected object pattern"),
                },
                _ => panic!("expected variable declaration"),
            }
        }

        #[test]
        fn for_of_statement_with_let_binding() {
            let ast = assert_parse_success("for (let item of items) { use(item); }");
            match &ast.body[0] {
                Statement::ForOfStatement { left, .. } => {
                    assert!(matches!(left, ForInOfLeft::VariableDeclaration { kind: VariableDeclarationKind::Let, .. }));
                }
                _ => panic!("expected for-of statement"),
            }
        }

        #[test]
        fn try_catch_with_bound_parameter() {
            let ast = assert_parse_success("try { risky(); } catch (e) { handle(e); }");
            match &ast.body[0] {
                Statement::TryStatement { handler: Some(handler), .. } => {
                    assert!(matches!(handler.param, Some(Pattern::Identifier(_))));
                }
                _ => panic!("expected try statement with a handler"),
            }
        }

        #[test]
        fn typeof_of_a_bare_identifier() {
            let ast = assert_parse_success("typeof maybeDefined;");
            match &ast.body[0] {
                Statement::ExpressionStatement {
                    expression: Expression::UnaryExpression { operator: UnaryOperator::Typeof, argument },
                } => {
                    assert!(matches!(argument.as_ref(), Expression::Identifier(_)));
                }
                _ => panic!("expected a typeof unary expression"),
            }
        }

        #[test]
        fn class_with_private_field_and_method() {
            let ast = assert_parse_success(
                "class Counter { #count = 0; increment() { this.#count++; } }",
            );
            match &ast.body[0] {
                Statement::ClassDeclaration { id, body, .. } => {
                    assert_eq!(id.as_ref().unwrap().name, "Counter");
                    assert_eq!(body.body.len(), 2);
                }
                _ => panic!("expected class declaration"),
            }
        }

        #[test]
        fn template_literal_with_interpolation() {
            let ast = assert_parse_success("const greeting = `hello, ${name}!`;");
            match &ast.body[0] {
                Statement::VariableDeclaration { declarations, .. } => match declarations[0].init.as_ref().unwrap() {
                    Expression::TemplateLiteral { quasis, expressions } => {
                        assert_eq!(quasis.len(), 2);
                        assert_eq!(expressions.len(), 1);
                    }
                    _ => panic!("expected template literal"),
                },
                _ => panic!("expected variable declaration"),
            }
        }

        #[test]
        fn logical_expression_maps_to_binary_operator() {
            let ast = assert_parse_success("a && b;");
            match &ast.body[0] {
                Statement::ExpressionStatement { expression: Expression::BinaryExpression { operator, .. } } => {
                    assert!(matches!(operator, BinaryOperator::LogicalAnd));
                }
                _ => panic!("expected a logical-and binary expression"),
            }
        }

        #[test]
        fn import_and_export_declarations() {
            let ast = assert_parse_success("import fs from 'fs'; export const x = 1;");
            assert!(matches!(ast.body[0], Statement::ImportDeclaration { .. }));
            assert!(matches!(ast.body[1], Statement::ExportNamedDeclaration { .. }));
        }

        #[test]
        fn module_source_type_is_detected() {
            let ast = assert_parse_success("export const x = 1;");
            assert!(matches!(ast.source_type, ProgramSourceType::Module));
        }

        #[test]
        fn rest_parameter_is_included_after_the_named_parameters() {
            let ast = assert_parse_success("function f(a, ...rest) { return rest; }");
            match &ast.body[0] {
                Statement::FunctionDeclaration { params, .. } => {
                    assert_eq!(params.len(), 2);
                    match &params[1] {
                        Pattern::RestElement { argument } => {
                            assert!(matches!(argument.as_ref(), Pattern::Identifier(id) if id.name == "rest"));
                        }
                        _ => panic!("expected a rest element as the last parameter"),
                    }
                }
                _ => panic!("expected function declaration"),
            }
        }

        #[test]
        fn spread_in_call_arguments_is_kept_as_an_expression() {
            let ast = assert_parse_success("f(...args);");
            match &ast.body[0] {
                Statement::ExpressionStatement { expression: Expression::CallExpression { arguments, .. } } => {
                    assert_eq!(arguments.len(), 1);
                    assert!(matches!(arguments[0], Expression::Identifier(_)));
                }
                _ => panic!("expected a call expression"),
            }
        }

        #[test]
        fn spread_in_array_literal_is_kept_as_an_expression() {
            let ast = assert_parse_success("const combined = [...items];");
            match &ast.body[0] {
                Statement::VariableDeclaration { declarations, .. } => match declarations[0].init.as_ref().unwrap() {
                    Expression::ArrayExpression { elements } => {
                        assert_eq!(elements.len(), 1);
                        assert!(matches!(elements[0], Some(Expression::Identifier(_))));
                    }
                    _ => panic!("expected array expression"),
                },
                _ => panic!("expected variable declaration"),
            }
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn regex_literal_is_not_confused_with_division() {
            let ast = assert_parse_success("const pattern = /abc/g;");
            match &ast.body[0] {
                Statement::VariableDeclaration { declarations, .. } => {
                    assert!(matches!(declarations[0].init, Some(Expression::Literal(Literal::RegExp(_)))));
                }
                _ => panic!("expected variable declaration"),
            }
        }

        #[test]
        fn automatic_semicolon_insertion_before_return_value() {
            let ast = assert_parse_success("function f() {\n  return\n  1;\n}");
            match &ast.body[0] {
                Statement::FunctionDeclaration { body, .. } => {
                    // ASI turns `return\n1;` into two statements: an empty
                    // return and a following expression statement.
                    assert!(matches!(body.body[0], Statement::ReturnStatement { argument: None }));
                }
                _ => panic!("expected function declaration"),
            }
        }

        #[test]
        fn deeply_nested_binary_expressions_parse() {
            let source = "1 + 2 * 3 - 4 / 5 + 6 * 7 - 8 / 9 + 10;";
            let ast = assert_parse_success(source);
            assert_eq!(ast.body.len(), 1);
        }

        #[test]
        fn empty_statements_are_dropped_into_a_marker_node() {
            let ast = assert_parse_success(";;;let x = 1;");
            assert!(ast.body.iter().any(|stmt| matches!(stmt, Statement::EmptyStatement)));
        }
    }

    mod invalid_inputs {
        use super::*;
        use crate::parser::parse_js;

        #[test]
        fn unmatched_braces_produce_a_parse_error() {
            let result = parse_js("function f() {", "test.js", &ParserConfig::default());
            assert!(!result.errors.is_empty());
            assert!(result.ast.is_none());
        }

        #[test]
        fn unterminated_string_produces_a_parse_error() {
            let result = parse_js("let x = \"unterminated;", "test.js", &ParserConfig::default());
            assert!(!result.errors.is_empty());
        }
    }

    mod trivia_tests {
        use super::*;

        #[test]
        fn line_comments_are_preserved() {
            let result = parse_js("// a comment\nlet x = 1;", "test.js", &ParserConfig::default());
            let trivia = result.trivia.expect("trivia preserved by default");
            assert_eq!(trivia.line_comments.len(), 1);
            assert_eq!(trivia.line_comments[0].text, "a comment");
        }

        #[test]
        fn block_comments_are_preserved() {
            let result = parse_js("/* block */\nlet x = 1;", "test.js", &ParserConfig::default());
            let trivia = result.trivia.expect("trivia preserved by default");
            assert_eq!(trivia.block_comments.len(), 1);
            assert_eq!(trivia.block_comments[0].text, "block");
        }

        #[test]
        fn trivia_disabled_yields_none() {
            let config = ParserConfig { preserve_trivia: false, ..ParserConfig::default() };
            let result = parse_js("// a comment\nlet x = 1;", "test.js", &config);
            assert!(result.trivia.is_none());
        }
    }
}
