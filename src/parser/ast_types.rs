//! # AST Types
//!
//! A simplified, serializable mirror of the OXC AST. Each node keeps just
//! enough information for scope analysis: declaration shapes, identifier
//! spans, and the handful of expression forms that can contain a variable
//! reference. Conversion from OXC is total for statements and patterns that
//! matter to scope analysis; constructs with no scoping consequence (most
//! literals' internal structure, JSX, decorators) are represented loosely
//! or dropped, never panicked on.

use oxc_ast::ast as oxc;
use serde::{Deserialize, Serialize};

/// Root program node containing all statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub body:        Vec<Statement>,
    pub source_type: ProgramSourceType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProgramSourceType {
    Script,
    Module,
}

/// JavaScript statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    VariableDeclaration {
        declarations: Vec<VariableDeclarator>,
        kind:         VariableDeclarationKind,
    },
    FunctionDeclaration {
        id:           Option<Identifier>,
        params:       Vec<Pattern>,
        body:         BlockStatement,
        is_async:     bool,
        is_generator: bool,
    },
    ClassDeclaration {
        id:          Option<Identifier>,
        super_class: Option<Box<Expression>>,
        body:        ClassBody,
    },
    ExpressionStatement {
        expression: Expression,
    },
    BlockStatement {
        body: Vec<Statement>,
    },
    ReturnStatement {
        argument: Option<Expression>,
    },
    IfStatement {
        test:       Expression,
        consequent: Box<Statement>,
        alternate:  Option<Box<Statement>>,
    },
    WhileStatement {
        test: Expression,
        body: Box<Statement>,
    },
    DoWhileStatement {
        body: Box<Statement>,
        test: Expression,
    },
    ForStatement {
        init:   Option<ForInit>,
        test:   Option<Expression>,
        update: Option<Expression>,
        body:   Box<Statement>,
    },
    /// `for (lhs in rhs) body`
    ForInStatement {
        left:  ForInOfLeft,
        right: Expression,
        body:  Box<Statement>,
    },
    /// `for (lhs of rhs) body`
    ForOfStatement {
        left:  ForInOfLeft,
        right: Expression,
        body:  Box<Statement>,
    },
    TryStatement {
        block:   BlockStatement,
        handler: Option<CatchClause>,
        finally: Option<BlockStatement>,
    },
    SwitchStatement {
        discriminant: Expression,
        cases:        Vec<SwitchCase>,
    },
    ThrowStatement {
        argument: Expression,
    },
    BreakStatement {
        label: Option<Identifier>,
    },
    ContinueStatement {
        label: Option<Identifier>,
    },
    LabeledStatement {
        label: Identifier,
        body:  Box<Statement>,
    },
    EmptyStatement,
    ImportDeclaration {
        specifiers: Vec<ImportSpecifier>,
        source:     StringLiteral,
    },
    ExportNamedDeclaration {
        declaration: Option<Box<Statement>>,
        specifiers:  Vec<ExportSpecifier>,
        source:      Option<StringLiteral>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VariableDeclarationKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub id:   Pattern,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBody {
    pub body: Vec<ClassElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClassElement {
    PropertyDefinition {
        key:        PropertyKey,
        value:      Option<Expression>,
        is_static:  bool,
        is_private: bool,
    },
    MethodDefinition {
        key:        PropertyKey,
        value:      FunctionExpression,
        kind:       MethodKind,
        is_static:  bool,
        is_private: bool,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ForInit {
    VariableDeclaration {
        declarations: Vec<VariableDeclarator>,
        kind:         VariableDeclarationKind,
    },
    Expression(Expression),
}

/// The binding side of a `for-in`/`for-of` head: either a fresh declaration
/// or an assignment to an existing binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ForInOfLeft {
    VariableDeclaration { id: Pattern, kind: VariableDeclarationKind },
    AssignmentTarget(Pattern),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body:  BlockStatement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchCase {
    pub test:       Option<Expression>,
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportSpecifier {
    ImportDefaultSpecifier { local: Identifier },
    ImportNamespaceSpecifier { local: Identifier },
    ImportSpecifier { imported: Identifier, local: Identifier },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportSpecifier {
    ExportSpecifier { local: Identifier, exported: Identifier },
}

/// JavaScript expressions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    ThisExpression,
    Literal(Literal),
    BinaryExpression {
        left:     Box<Expression>,
        operator: BinaryOperator,
        right:    Box<Expression>,
    },
    UnaryExpression {
        operator: UnaryOperator,
        argument: Box<Expression>,
    },
    AssignmentExpression {
        left:     Box<Pattern>,
        operator: AssignmentOperator,
        right:    Box<Expression>,
    },
    UpdateExpression {
        operator: UpdateOperator,
        argument: Box<Expression>,
        prefix:   bool,
    },
    CallExpression {
        callee:    Box<Expression>,
        arguments: Vec<Expression>,
    },
    NewExpression {
        callee:    Box<Expression>,
        arguments: Vec<Expression>,
    },
    MemberExpression {
        object:   Box<Expression>,
        property: Box<Expression>,
        computed: bool,
    },
    FunctionExpression(FunctionExpression),
    ArrowFunctionExpression {
        params:   Vec<Pattern>,
        body:     ArrowFunctionBody,
        is_async: bool,
    },
    ObjectExpression {
        properties: Vec<ObjectProperty>,
    },
    ArrayExpression {
        elements: Vec<Option<Expression>>,
    },
    TemplateLiteral {
        quasis:      Vec<TemplateElement>,
        expressions: Vec<Expression>,
    },
    ConditionalExpression {
        test:       Box<Expression>,
        consequent: Box<Expression>,
        alternate:  Box<Expression>,
    },
    SequenceExpression {
        expressions: Vec<Expression>,
    },
    AwaitExpression {
        argument: Box<Expression>,
    },
    YieldExpression {
        argument: Option<Box<Expression>>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionExpression {
    pub id:           Option<Identifier>,
    pub params:       Vec<Pattern>,
    pub body:         BlockStatement,
    pub is_async:     bool,
    pub is_generator: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArrowFunctionBody {
    BlockStatement(BlockStatement),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectProperty {
    Property {
        key:       PropertyKey,
        value:     Expression,
        kind:      PropertyKind,
        method:    bool,
        shorthand: bool,
        computed:  bool,
    },
    SpreadElement {
        argument: Expression,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
    PrivateName(PrivateName),
    Computed(Box<Expression>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateName {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateElement {
    pub value: String,
    pub tail:  bool,
}

/// Patterns, for destructuring, parameters, and binding targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    Member {
        object:   Box<Expression>,
        property: Box<Expression>,
        computed: bool,
    },
    ArrayPattern {
        elements: Vec<Option<Pattern>>,
    },
    ObjectPattern {
        properties: Vec<ObjectPatternProperty>,
    },
    AssignmentPattern {
        left:  Box<Pattern>,
        right: Expression,
    },
    RestElement {
        argument: Box<Pattern>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectPatternProperty {
    Property {
        key:       PropertyKey,
        value:     Pattern,
        computed:  bool,
        shorthand: bool,
    },
    RestElement {
        argument: Pattern,
    },
}

/// A source identifier. `start`/`end` are byte offsets into the original
/// source text, carried through for diagnostic rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    pub name:  String,
    pub start: u32,
    pub end:   u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Literal {
    String(StringLiteral),
    Number(NumberLiteral),
    Boolean(BooleanLiteral),
    Null,
    RegExp(RegExpLiteral),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegExpLiteral {
    pub pattern: String,
    pub flags:   String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Exponentiation,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LogicalAnd,
    LogicalOr,
    NullishCoalescing,
    In,
    Instanceof,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    LogicalNot,
    BitwiseNot,
    Typeof,
    Void,
    Delete,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    RemainderAssign,
    ExponentiationAssign,
    LeftShiftAssign,
    RightShiftAssign,
    UnsignedRightShiftAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
    LogicalAndAssign,
    LogicalOrAssign,
    NullishCoalescingAssign,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl Program {
    pub fn from_oxc(oxc_program: &oxc::Program<'_>) -> Self {
        let body = oxc_program.body.iter().filter_map(Statement::from_oxc).collect();
        let source_type = if oxc_program.source_type.is_module() {
            ProgramSourceType::Module
        } else {
            ProgramSourceType::Script
        };
        Self { body, source_type }
    }
}

fn block_from_oxc(block: &oxc::FunctionBody<'_>) -> BlockStatement {
    BlockStatement { body: block.statements.iter().filter_map(Statement::from_oxc).collect() }
}

/// Converts a parameter list's own bindings plus its trailing rest parameter
/// (`...args`), if any, into one flat list in declaration order.
fn function_params_from_oxc(params: &oxc::FormalParameters<'_>) -> Vec<Pattern> {
    let mut result: Vec<Pattern> = params.items.iter().filter_map(|param| Pattern::from_oxc(&param.pattern)).collect();
    if let Some(rest) = &params.rest {
        if let Some(argument) = Pattern::from_oxc(&rest.argument) {
            result.push(Pattern::RestElement { argument: Box::new(argument) });
        }
    }
    result
}

impl Statement {
    pub fn from_oxc(oxc_stmt: &oxc::Statement<'_>) -> Option<Self> {
        match oxc_stmt {
            oxc::Statement::VariableDeclaration(decl) => {
                let kind = VariableDeclarationKind::from_oxc(decl.kind)?;
                let declarations = decl.declarations.iter().filter_map(VariableDeclarator::from_oxc).collect();
                Some(Statement::VariableDeclaration { declarations, kind })
            }
            oxc::Statement::FunctionDeclaration(func) => {
                let id = func.id.as_ref().map(Identifier::from_binding);
                let params = function_params_from_oxc(&func.params);
                let body = block_from_oxc(func.body.as_ref()?);
                Some(Statement::FunctionDeclaration { id, params, body, is_async: func.r#async, is_generator: func.generator })
            }
            oxc::Statement::ClassDeclaration(class) => {
                let id = class.id.as_ref().map(Identifier::from_binding);
                let super_class = class.super_class.as_ref().and_then(Expression::from_oxc).map(Box::new);
                let body = ClassBody { body: class.body.body.iter().filter_map(ClassElement::from_oxc).collect() };
                Some(Statement::ClassDeclaration { id, super_class, body })
            }
            oxc::Statement::ExpressionStatement(stmt) => {
                Expression::from_oxc(&stmt.expression).map(|expression| Statement::ExpressionStatement { expression })
            }
            oxc::Statement::BlockStatement(block) => {
                Some(Statement::BlockStatement { body: block.body.iter().filter_map(Statement::from_oxc).collect() })
            }
            oxc::Statement::ReturnStatement(stmt) => {
                let argument = stmt.argument.as_ref().and_then(Expression::from_oxc);
                Some(Statement::ReturnStatement { argument })
            }
            oxc::Statement::IfStatement(if_stmt) => {
                let test = Expression::from_oxc(&if_stmt.test)?;
                let consequent = Box::new(Statement::from_oxc(&if_stmt.consequent)?);
                let alternate = if_stmt.alternate.as_ref().and_then(Statement::from_oxc).map(Box::new);
                Some(Statement::IfStatement { test, consequent, alternate })
            }
            oxc::Statement::WhileStatement(while_stmt) => {
                let test = Expression::from_oxc(&while_stmt.test)?;
                let body = Box::new(Statement::from_oxc(&while_stmt.body)?);
                Some(Statement::WhileStatement { test, body })
            }
            oxc::Statement::DoWhileStatement(stmt) => {
                let body = Box::new(Statement::from_oxc(&stmt.body)?);
                let test = Expression::from_oxc(&stmt.test)?;
                Some(Statement::DoWhileStatement { body, test })
            }
            oxc::Statement::ForStatement(for_stmt) => {
                let init = for_stmt.init.as_ref().and_then(ForInit::from_oxc);
                let test = for_stmt.test.as_ref().and_then(Expression::from_oxc);
                let update = for_stmt.update.as_ref().and_then(Expression::from_oxc);
                let body = Box::new(Statement::from_oxc(&for_stmt.body)?);
                Some(Statement::ForStatement { init, test, update, body })
            }
            oxc::Statement::ForInStatement(stmt) => {
                let left = ForInOfLeft::from_oxc(&stmt.left)?;
                let right = Expression::from_oxc(&stmt.right)?;
                let body = Box::new(Statement::from_oxc(&stmt.body)?);
                Some(Statement::ForInStatement { left, right, body })
            }
            oxc::Statement::ForOfStatement(stmt) => {
                let left = ForInOfLeft::from_oxc(&stmt.left)?;
                let right = Expression::from_oxc(&stmt.right)?;
                let body = Box::new(Statement::from_oxc(&stmt.body)?);
                Some(Statement::ForOfStatement { left, right, body })
            }
            oxc::Statement::TryStatement(stmt) => {
                let block = BlockStatement { body: stmt.block.body.iter().filter_map(Statement::from_oxc).collect() };
                let handler = stmt.handler.as_ref().map(|handler| CatchClause {
                    param: handler.param.as_ref().and_then(|p| Pattern::from_oxc(&p.pattern)),
                    body:  BlockStatement { body: handler.body.body.iter().filter_map(Statement::from_oxc).collect() },
                });
                let finally = stmt
                    .finalizer
                    .as_ref()
                    .map(|block| BlockStatement { body: block.body.iter().filter_map(Statement::from_oxc).collect() });
                Some(Statement::TryStatement { block, handler, finally })
            }
            oxc::Statement::SwitchStatement(stmt) => {
                let discriminant = Expression::from_oxc(&stmt.discriminant)?;
                let cases = stmt
                    .cases
                    .iter()
                    .map(|case| SwitchCase {
                        test:       case.test.as_ref().and_then(Expression::from_oxc),
                        consequent: case.consequent.iter().filter_map(Statement::from_oxc).collect(),
                    })
                    .collect();
                Some(Statement::SwitchStatement { discriminant, cases })
            }
            oxc::Statement::ThrowStatement(stmt) => {
                Expression::from_oxc(&stmt.argument).map(|argument| Statement::ThrowStatement { argument })
            }
            oxc::Statement::BreakStatement(stmt) => {
                Some(Statement::BreakStatement { label: stmt.label.as_ref().map(Identifier::from_label) })
            }
            oxc::Statement::ContinueStatement(stmt) => {
                Some(Statement::ContinueStatement { label: stmt.label.as_ref().map(Identifier::from_label) })
            }
            oxc::Statement::LabeledStatement(stmt) => {
                let label = Identifier::from_label(&stmt.label);
                let body = Box::new(Statement::from_oxc(&stmt.body)?);
                Some(Statement::LabeledStatement { label, body })
            }
            oxc::Statement::EmptyStatement(_) => Some(Statement::EmptyStatement),
            _ => None,
        }
    }
}

impl VariableDeclarationKind {
    fn from_oxc(kind: oxc::VariableDeclarationKind) -> Option<Self> {
        match kind {
            oxc::VariableDeclarationKind::Var => Some(VariableDeclarationKind::Var),
            oxc::VariableDeclarationKind::Let => Some(VariableDeclarationKind::Let),
            oxc::VariableDeclarationKind::Const => Some(VariableDeclarationKind::Const),
            _ => None,
        }
    }
}

impl VariableDeclarator {
    pub fn from_oxc(oxc_decl: &oxc::VariableDeclarator<'_>) -> Option<Self> {
        let id = Pattern::from_oxc(&oxc_decl.id)?;
        let init = oxc_decl.init.as_ref().and_then(Expression::from_oxc);
        Some(Self { id, init })
    }
}

impl ForInit {
    fn from_oxc(init: &oxc::ForStatementInit<'_>) -> Option<Self> {
        if let Some(expr) = init.as_expression() {
            return Expression::from_oxc(expr).map(ForInit::Expression);
        }
        if let oxc::ForStatementInit::VariableDeclaration(decl) = init {
            let kind = VariableDeclarationKind::from_oxc(decl.kind)?;
            let declarations = decl.declarations.iter().filter_map(VariableDeclarator::from_oxc).collect();
            return Some(ForInit::VariableDeclaration { declarations, kind });
        }
        None
    }
}

impl ForInOfLeft {
    fn from_oxc(left: &oxc::ForStatementLeft<'_>) -> Option<Self> {
        match left {
            oxc::ForStatementLeft::VariableDeclaration(decl) => {
                let kind = VariableDeclarationKind::from_oxc(decl.kind)?;
                let id = Pattern::from_oxc(&decl.declarations.first()?.id)?;
                Some(ForInOfLeft::VariableDeclaration { id, kind })
            }
            assignment_target => {
                let pattern = Pattern::from_assignment_target(assignment_target.as_assignment_target()?)?;
                Some(ForInOfLeft::AssignmentTarget(pattern))
            }
        }
    }
}

impl ClassElement {
    pub fn from_oxc(oxc_elem: &oxc::ClassElement<'_>) -> Option<Self> {
        match oxc_elem {
            oxc::ClassElement::PropertyDefinition(prop) => {
                let key = PropertyKey::from_oxc(&prop.key)?;
                let value = prop.value.as_ref().and_then(Expression::from_oxc);
                let is_static = prop.r#static;
                let is_private = matches!(&prop.key, oxc::PropertyKey::PrivateIdentifier(_));
                Some(ClassElement::PropertyDefinition { key, value, is_static, is_private })
            }
            oxc::ClassElement::MethodDefinition(method) => {
                let key = PropertyKey::from_oxc(&method.key)?;
                let value = FunctionExpression::from_oxc(&method.value)?;
                let kind = match method.kind {
                    oxc::MethodDefinitionKind::Constructor => MethodKind::Constructor,
                    oxc::MethodDefinitionKind::Method => MethodKind::Method,
                    oxc::MethodDefinitionKind::Get => MethodKind::Get,
                    oxc::MethodDefinitionKind::Set => MethodKind::Set,
                };
                let is_static = method.r#static;
                let is_private = matches!(&method.key, oxc::PropertyKey::PrivateIdentifier(_));
                Some(ClassElement::MethodDefinition { key, value, kind, is_static, is_private })
            }
            _ => None,
        }
    }
}

impl Expression {
    pub fn from_oxc(oxc_expr: &oxc::Expression<'_>) -> Option<Self> {
        match oxc_expr {
            oxc::Expression::Identifier(id) => Some(Expression::Identifier(Identifier::from_reference(id))),
            oxc::Expression::ThisExpression(_) => Some(Expression::ThisExpression),
            oxc::Expression::NumericLiteral(lit) => Some(Expression::Literal(Literal::Number(NumberLiteral { value: lit.value }))),
            oxc::Expression::StringLiteral(lit) => Some(Expression::Literal(Literal::String(StringLiteral { value: lit.value.to_string() }))),
            oxc::Expression::BooleanLiteral(lit) => Some(Expression::Literal(Literal::Boolean(BooleanLiteral { value: lit.value }))),
            oxc::Expression::NullLiteral(_) => Some(Expression::Literal(Literal::Null)),
            oxc::Expression::RegExpLiteral(regex) => Some(Expression::Literal(Literal::RegExp(RegExpLiteral {
                pattern: regex.regex.pattern.to_string(),
                flags:   regex.regex.flags.to_string(),
            }))),
            oxc::Expression::BinaryExpression(expr) => {
                let left = Box::new(Expression::from_oxc(&expr.left)?);
                let right = Box::new(Expression::from_oxc(&expr.right)?);
                let operator = BinaryOperator::from_oxc(expr.operator)?;
                Some(Expression::BinaryExpression { left, operator, right })
            }
            oxc::Expression::LogicalExpression(expr) => {
                let left = Box::new(Expression::from_oxc(&expr.left)?);
                let right = Box::new(Expression::from_oxc(&expr.right)?);
                let operator = match expr.operator {
                    oxc::LogicalOperator::And => BinaryOperator::LogicalAnd,
                    oxc::LogicalOperator::Or => BinaryOperator::LogicalOr,
                    oxc::LogicalOperator::Coalesce => BinaryOperator::NullishCoalescing,
                };
                Some(Expression::BinaryExpression { left, operator, right })
            }
            oxc::Expression::UnaryExpression(expr) => {
                let argument = Box::new(Expression::from_oxc(&expr.argument)?);
                let operator = match expr.operator {
                    oxc::UnaryOperator::UnaryPlus => UnaryOperator::Plus,
                    oxc::UnaryOperator::UnaryNegation => UnaryOperator::Minus,
                    oxc::UnaryOperator::LogicalNot => UnaryOperator::LogicalNot,
                    oxc::UnaryOperator::BitwiseNot => UnaryOperator::BitwiseNot,
                    oxc::UnaryOperator::Typeof => UnaryOperator::Typeof,
                    oxc::UnaryOperator::Void => UnaryOperator::Void,
                    oxc::UnaryOperator::Delete => UnaryOperator::Delete,
                };
                Some(Expression::UnaryExpression { operator, argument })
            }
            oxc::Expression::AssignmentExpression(expr) => {
                let left = Box::new(Pattern::from_assignment_target(&expr.left)?);
                let right = Box::new(Expression::from_oxc(&expr.right)?);
                let operator = AssignmentOperator::from_oxc(expr.operator)?;
                Some(Expression::AssignmentExpression { left, operator, right })
            }
            oxc::Expression::UpdateExpression(expr) => {
                let argument = Box::new(simple_target_to_expression(&expr.argument)?);
                let operator = match expr.operator {
                    oxc::UpdateOperator::Increment => UpdateOperator::Increment,
                    oxc::UpdateOperator::Decrement => UpdateOperator::Decrement,
                };
                Some(Expression::UpdateExpression { operator, argument, prefix: expr.prefix })
            }
            oxc::Expression::CallExpression(call) => {
                let callee = Box::new(Expression::from_oxc(&call.callee)?);
                let arguments = call.arguments.iter().filter_map(|arg| argument_to_expression(arg)).collect();
                Some(Expression::CallExpression { callee, arguments })
            }
            oxc::Expression::NewExpression(expr) => {
                let callee = Box::new(Expression::from_oxc(&expr.callee)?);
                let arguments = expr.arguments.iter().filter_map(|arg| argument_to_expression(arg)).collect();
                Some(Expression::NewExpression { callee, arguments })
            }
            oxc::Expression::StaticMemberExpression(expr) => {
                let object = Box::new(Expression::from_oxc(&expr.object)?);
                let property = Box::new(Expression::Identifier(Identifier {
                    name:  expr.property.name.to_string(),
                    start: expr.property.span.start,
                    end:   expr.property.span.end,
                }));
                Some(Expression::MemberExpression { object, property, computed: false })
            }
            oxc::Expression::ComputedMemberExpression(expr) => {
                let object = Box::new(Expression::from_oxc(&expr.object)?);
                let property = Box::new(Expression::from_oxc(&expr.expression)?);
                Some(Expression::MemberExpression { object, property, computed: true })
            }
            oxc::Expression::FunctionExpression(func) => Some(Expression::FunctionExpression(FunctionExpression::from_oxc(func)?)),
            oxc::Expression::ArrowFunctionExpression(func) => {
                let params = function_params_from_oxc(&func.params);
                let body = if func.expression {
                    let expr_stmt = func.body.statements.first()?;
                    let oxc::Statement::ExpressionStatement(stmt) = expr_stmt else { return None };
                    ArrowFunctionBody::Expression(Box::new(Expression::from_oxc(&stmt.expression)?))
                } else {
                    ArrowFunctionBody::BlockStatement(BlockStatement {
                        body: func.body.statements.iter().filter_map(Statement::from_oxc).collect(),
                    })
                };
                Some(Expression::ArrowFunctionExpression { params, body, is_async: func.r#async })
            }
            oxc::Expression::ObjectExpression(obj) => {
                let properties = obj.properties.iter().filter_map(ObjectProperty::from_oxc).collect();
                Some(Expression::ObjectExpression { properties })
            }
            oxc::Expression::ArrayExpression(arr) => {
                let elements = arr
                    .elements
                    .iter()
                    .map(|elem| match elem {
                        oxc::ArrayExpressionElement::Elision(_) => None,
                        oxc::ArrayExpressionElement::SpreadElement(spread) => Expression::from_oxc(&spread.argument),
                        other => other.as_expression().and_then(Expression::from_oxc),
                    })
                    .collect();
                Some(Expression::ArrayExpression { elements })
            }
            oxc::Expression::TemplateLiteral(tmpl) => {
                let quasis = tmpl.quasis.iter().map(|quasi| TemplateElement { value: quasi.value.raw.to_string(), tail: quasi.tail }).collect();
                let expressions = tmpl.expressions.iter().filter_map(Expression::from_oxc).collect();
                Some(Expression::TemplateLiteral { quasis, expressions })
            }
            oxc::Expression::ConditionalExpression(expr) => {
                let test = Box::new(Expression::from_oxc(&expr.test)?);
                let consequent = Box::new(Expression::from_oxc(&expr.consequent)?);
                let alternate = Box::new(Expression::from_oxc(&expr.alternate)?);
                Some(Expression::ConditionalExpression { test, consequent, alternate })
            }
            oxc::Expression::SequenceExpression(expr) => {
                let expressions = expr.expressions.iter().filter_map(Expression::from_oxc).collect();
                Some(Expression::SequenceExpression { expressions })
            }
            oxc::Expression::AwaitExpression(expr) => Some(Expression::AwaitExpression { argument: Box::new(Expression::from_oxc(&expr.argument)?) }),
            oxc::Expression::YieldExpression(expr) => {
                Some(Expression::YieldExpression { argument: expr.argument.as_ref().and_then(Expression::from_oxc).map(Box::new) })
            }
            oxc::Expression::ParenthesizedExpression(expr) => Expression::from_oxc(&expr.expression),
            _ => None,
        }
    }
}

/// An update expression's operand is a restricted assignment target
/// (identifier or member expression), not a full pattern.
fn simple_target_to_expression(target: &oxc::SimpleAssignmentTarget<'_>) -> Option<Expression> {
    match target {
        oxc::SimpleAssignmentTarget::AssignmentTargetIdentifier(id) => Some(Expression::Identifier(Identifier::from_reference(id))),
        oxc::SimpleAssignmentTarget::StaticMemberExpression(expr) => {
            let object = Box::new(Expression::from_oxc(&expr.object)?);
            let property = Box::new(Expression::Identifier(Identifier {
                name:  expr.property.name.to_string(),
                start: expr.property.span.start,
                end:   expr.property.span.end,
            }));
            Some(Expression::MemberExpression { object, property, computed: false })
        }
        oxc::SimpleAssignmentTarget::ComputedMemberExpression(expr) => {
            let object = Box::new(Expression::from_oxc(&expr.object)?);
            let property = Box::new(Expression::from_oxc(&expr.expression)?);
            Some(Expression::MemberExpression { object, property, computed: true })
        }
        _ => None,
    }
}

/// A call/new argument is either a plain expression or a spread (`...args`);
/// either way the identifiers it carries need to be walked as uses.
fn argument_to_expression(arg: &oxc::Argument<'_>) -> Option<Expression> {
    match arg {
        oxc::Argument::SpreadElement(spread) => Expression::from_oxc(&spread.argument),
        other => other.as_expression().and_then(Expression::from_oxc),
    }
}

impl Pattern {
    pub fn from_oxc(oxc_pattern: &oxc::BindingPattern<'_>) -> Option<Self> {
        match &oxc_pattern.kind {
            oxc::BindingPatternKind::BindingIdentifier(id) => Some(Pattern::Identifier(Identifier::from_binding(id))),
            oxc::BindingPatternKind::ArrayPattern(arr) => {
                let mut elements: Vec<Option<Pattern>> = arr.elements.iter().map(|el| el.as_ref().and_then(Pattern::from_oxc)).collect();
                if let Some(rest) = &arr.rest {
                    elements.push(Pattern::from_oxc(&rest.argument).map(|p| Pattern::RestElement { argument: Box::new(p) }));
                }
                Some(Pattern::ArrayPattern { elements })
            }
            oxc::BindingPatternKind::ObjectPattern(obj) => {
                let mut properties: Vec<ObjectPatternProperty> = obj
                    .properties
                    .iter()
                    .filter_map(|prop| {
                        let key = PropertyKey::from_oxc(&prop.key)?;
                        let value = Pattern::from_oxc(&prop.value)?;
                        Some(ObjectPatternProperty::Property { key, value, computed: prop.computed, shorthand: prop.shorthand })
                    })
                    .collect();
                if let Some(rest) = &obj.rest {
                    if let Some(argument) = Pattern::from_oxc(&rest.argument) {
                        properties.push(ObjectPatternProperty::RestElement { argument });
                    }
                }
                Some(Pattern::ObjectPattern { properties })
            }
            oxc::BindingPatternKind::AssignmentPattern(pat) => {
                let left = Box::new(Pattern::from_oxc(&pat.left)?);
                let right = Expression::from_oxc(&pat.right)?;
                Some(Pattern::AssignmentPattern { left, right })
            }
        }
    }

    /// Converts the left-hand side of an assignment expression, which OXC
    /// represents separately from binding patterns since it can also target
    /// a member expression (`obj.prop = x`).
    fn from_assignment_target(target: &oxc::AssignmentTarget<'_>) -> Option<Self> {
        match target {
            oxc::AssignmentTarget::AssignmentTargetIdentifier(id) => Some(Pattern::Identifier(Identifier::from_reference(id))),
            oxc::AssignmentTarget::StaticMemberExpression(expr) => {
                let object = Box::new(Expression::from_oxc(&expr.object)?);
                let property = Box::new(Expression::Identifier(Identifier {
                    name:  expr.property.name.to_string(),
                    start: expr.property.span.start,
                    end:   expr.property.span.end,
                }));
                Some(Pattern::Member { object, property, computed: false })
            }
            oxc::AssignmentTarget::ComputedMemberExpression(expr) => {
                let object = Box::new(Expression::from_oxc(&expr.object)?);
                let property = Box::new(Expression::from_oxc(&expr.expression)?);
                Some(Pattern::Member { object, property, computed: true })
            }
            oxc::AssignmentTarget::ArrayAssignmentTarget(arr) => {
                let elements =
                    arr.elements.iter().map(|el| el.as_ref().and_then(Pattern::from_assignment_target_maybe_elision)).collect();
                Some(Pattern::ArrayPattern { elements })
            }
            oxc::AssignmentTarget::ObjectAssignmentTarget(obj) => {
                let properties = obj
                    .properties
                    .iter()
                    .filter_map(|prop| match prop {
                        oxc::AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(id) => Some(ObjectPatternProperty::Property {
                            key:       PropertyKey::Identifier(Identifier::from_reference(&id.binding)),
                            value:     Pattern::Identifier(Identifier::from_reference(&id.binding)),
                            computed:  false,
                            shorthand: true,
                        }),
                        oxc::AssignmentTargetProperty::AssignmentTargetPropertyProperty(prop) => {
                            let key = PropertyKey::from_oxc(&prop.name)?;
                            let value = Pattern::from_assignment_target_maybe_elision(&prop.binding)?;
                            Some(ObjectPatternProperty::Property { key, value, computed: false, shorthand: false })
                        }
                    })
                    .collect();
                Some(Pattern::ObjectPattern { properties })
            }
            _ => None,
        }
    }

    fn from_assignment_target_maybe_elision(target: &oxc::AssignmentTargetMaybeDefault<'_>) -> Option<Self> {
        match target {
            oxc::AssignmentTargetMaybeDefault::AssignmentTargetWithDefault(with_default) => {
                let left = Box::new(Pattern::from_assignment_target(&with_default.binding)?);
                let right = Expression::from_oxc(&with_default.init)?;
                Some(Pattern::AssignmentPattern { left, right })
            }
            target => target.as_assignment_target().and_then(Pattern::from_assignment_target),
        }
    }
}

impl Identifier {
    pub fn from_binding(oxc_id: &oxc::BindingIdentifier<'_>) -> Self {
        Self { name: oxc_id.name.to_string(), start: oxc_id.span.start, end: oxc_id.span.end }
    }

    pub fn from_reference(oxc_id: &oxc::IdentifierReference<'_>) -> Self {
        Self { name: oxc_id.name.to_string(), start: oxc_id.span.start, end: oxc_id.span.end }
    }

    pub fn from_label(oxc_id: &oxc::LabelIdentifier<'_>) -> Self {
        Self { name: oxc_id.name.to_string(), start: oxc_id.span.start, end: oxc_id.span.end }
    }
}

impl BinaryOperator {
    pub fn from_oxc(oxc_op: oxc::BinaryOperator) -> Option<Self> {
        match oxc_op {
            oxc::BinaryOperator::Addition => Some(BinaryOperator::Add),
            oxc::BinaryOperator::Subtraction => Some(BinaryOperator::Subtract),
            oxc::BinaryOperator::Multiplication => Some(BinaryOperator::Multiply),
            oxc::BinaryOperator::Division => Some(BinaryOperator::Divide),
            oxc::BinaryOperator::Remainder => Some(BinaryOperator::Remainder),
            oxc::BinaryOperator::Exponential => Some(BinaryOperator::Exponentiation),
            oxc::BinaryOperator::Equality => Some(BinaryOperator::Equal),
            oxc::BinaryOperator::Inequality => Some(BinaryOperator::NotEqual),
            oxc::BinaryOperator::StrictEquality => Some(BinaryOperator::StrictEqual),
            oxc::BinaryOperator::StrictInequality => Some(BinaryOperator::StrictNotEqual),
            oxc::BinaryOperator::LessThan => Some(BinaryOperator::LessThan),
            oxc::BinaryOperator::LessEqualThan => Some(BinaryOperator::LessThanEqual),
            oxc::BinaryOperator::GreaterThan => Some(BinaryOperator::GreaterThan),
            oxc::BinaryOperator::GreaterEqualThan => Some(BinaryOperator::GreaterThanEqual),
            oxc::BinaryOperator::ShiftLeft => Some(BinaryOperator::LeftShift),
            oxc::BinaryOperator::ShiftRight => Some(BinaryOperator::RightShift),
            oxc::BinaryOperator::ShiftRightZeroFill => Some(BinaryOperator::UnsignedRightShift),
            oxc::BinaryOperator::BitwiseAnd => Some(BinaryOperator::BitwiseAnd),
            oxc::BinaryOperator::BitwiseOR => Some(BinaryOperator::BitwiseOr),
            oxc::BinaryOperator::BitwiseXOR => Some(BinaryOperator::BitwiseXor),
            oxc::BinaryOperator::In => Some(BinaryOperator::In),
            oxc::BinaryOperator::Instanceof => Some(BinaryOperator::Instanceof),
        }
    }
}

impl AssignmentOperator {
    fn from_oxc(op: oxc::AssignmentOperator) -> Option<Self> {
        match op {
            oxc::AssignmentOperator::Assign => Some(AssignmentOperator::Assign),
            oxc::AssignmentOperator::Addition => Some(AssignmentOperator::AddAssign),
            oxc::AssignmentOperator::Subtraction => Some(AssignmentOperator::SubtractAssign),
            oxc::AssignmentOperator::Multiplication => Some(AssignmentOperator::MultiplyAssign),
            oxc::AssignmentOperator::Division => Some(AssignmentOperator::DivideAssign),
            oxc::AssignmentOperator::Remainder => Some(AssignmentOperator::RemainderAssign),
            oxc::AssignmentOperator::Exponential => Some(AssignmentOperator::ExponentiationAssign),
            oxc::AssignmentOperator::ShiftLeft => Some(AssignmentOperator::LeftShiftAssign),
            oxc::AssignmentOperator::ShiftRight => Some(AssignmentOperator::RightShiftAssign),
            oxc::AssignmentOperator::ShiftRightZeroFill => Some(AssignmentOperator::UnsignedRightShiftAssign),
            oxc::AssignmentOperator::BitwiseAnd => Some(AssignmentOperator::BitwiseAndAssign),
            oxc::AssignmentOperator::BitwiseOR => Some(AssignmentOperator::BitwiseOrAssign),
            oxc::AssignmentOperator::BitwiseXOR => Some(AssignmentOperator::BitwiseXorAssign),
            oxc::AssignmentOperator::LogicalAnd => Some(AssignmentOperator::LogicalAndAssign),
            oxc::AssignmentOperator::LogicalOr => Some(AssignmentOperator::LogicalOrAssign),
            oxc::AssignmentOperator::LogicalNullish => Some(AssignmentOperator::NullishCoalescingAssign),
        }
    }
}

impl PropertyKey {
    pub fn from_oxc(oxc_key: &oxc::PropertyKey<'_>) -> Option<Self> {
        match oxc_key {
            oxc::PropertyKey::StaticIdentifier(id) => Some(PropertyKey::Identifier(Identifier { name: id.name.to_string(), start: id.span.start, end: id.span.end })),
            oxc::PropertyKey::PrivateIdentifier(private) => Some(PropertyKey::PrivateName(PrivateName { name: private.name.to_string() })),
            other => other.as_expression().and_then(Expression::from_oxc).map(|expr| PropertyKey::Computed(Box::new(expr))),
        }
    }
}

impl ObjectProperty {
    fn from_oxc(prop: &oxc::ObjectPropertyKind<'_>) -> Option<Self> {
        match prop {
            oxc::ObjectPropertyKind::ObjectProperty(prop) => {
                let key = PropertyKey::from_oxc(&prop.key)?;
                let value = Expression::from_oxc(&prop.value)?;
                let kind = match prop.kind {
                    oxc::PropertyKind::Init => PropertyKind::Init,
                    oxc::PropertyKind::Get => PropertyKind::Get,
                    oxc::PropertyKind::Set => PropertyKind::Set,
                };
                Some(ObjectProperty::Property { key, value, kind, method: prop.method, shorthand: prop.shorthand, computed: prop.computed })
            }
            oxc::ObjectPropertyKind::SpreadProperty(spread) => Expression::from_oxc(&spread.argument).map(|argument| ObjectProperty::SpreadElement { argument }),
        }
    }
}

impl FunctionExpression {
    pub fn from_oxc(oxc_func: &oxc::Function<'_>) -> Option<Self> {
        let id = oxc_func.id.as_ref().map(Identifier::from_binding);
        let params = function_params_from_oxc(&oxc_func.params);
        let body = block_from_oxc(oxc_func.body.as_ref()?);
        Some(FunctionExpression { id, params, body, is_async: oxc_func.r#async, is_generator: oxc_func.generator })
    }
}
