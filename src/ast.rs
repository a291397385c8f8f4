use std::fmt;
use std::fmt::Formatter;

/// A borrowed view over any AST node, the unit the evaluator dispatches on.
#[derive(Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    Expression(&'a Expression),
}

impl Node<'_> {
    pub fn token_literal(&self) -> String {
        match self {
            Node::Program(p) => p.token_literal(),
            Node::Statement(s) => s.token_literal(),
            Node::Block(b) => b.token_literal(),
            Node::Expression(e) => e.token_literal(),
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(p) => write!(f, "{}", p),
            Node::Statement(s) => write!(f, "{}", s),
            Node::Block(b) => write!(f, "{}", b),
            Node::Expression(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>
}

impl Program {
    pub fn token_literal(&self) -> String {
        self.statements.first().map(Statement::token_literal).unwrap_or_default()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

// An expression statement renders without a terminator, so a separator is
// written before whatever statement follows it.
fn write_statements(f: &mut Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    let mut previous: Option<&Statement> = None;
    for stmt in statements {
        if let Some(Statement::ExpressionStatement(_)) = previous {
            write!(f, "; ")?;
        }
        write!(f, "{}", stmt)?;
        previous = Some(stmt);
    }
    Ok(())
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier { value: value.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn token_literal(&self) -> String {
        "{".to_string()
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Statement {
    LetStatement { identifier: Identifier, value: Expression },
    ReturnStatement(Expression),
    ExpressionStatement(Expression),
}

impl Statement {
    pub fn token_literal(&self) -> String {
        match self {
            Statement::LetStatement { .. } => "let".to_string(),
            Statement::ReturnStatement(_) => "return".to_string(),
            Statement::ExpressionStatement(exp) => exp.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::LetStatement { identifier, value } => {
                write!(f, "let {} = {};", identifier, value)
            },
            Statement::ReturnStatement(ret) => {
                write!(f, "return {};", ret)
            },
            Statement::ExpressionStatement(exp) => {
                write!(f, "{}", exp)
            },
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Boolean(bool),
    Integer(i64),
    String(String),
    Array(Vec<Expression>),
    /// Key/value pairs in source order.
    Hash(Vec<(Expression, Expression)>),
    PrefixExpression {
        operation: String,
        right: Box<Expression>
    },
    InfixExpression {
        operation: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    IfExpression {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    Function {
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    CallExpression {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    IndexExpression {
        left: Box<Expression>,
        index: Box<Expression>,
    }
}

impl Expression {
    /// Literal text of the token the expression starts or is anchored on.
    pub fn token_literal(&self) -> String {
        match self {
            Expression::Identifier(ident) => ident.value.clone(),
            Expression::Boolean(b) => b.to_string(),
            Expression::Integer(i) => i.to_string(),
            Expression::String(st) => st.clone(),
            Expression::Array(_) => "[".to_string(),
            Expression::Hash(_) => "{".to_string(),
            Expression::PrefixExpression { operation, .. } => operation.clone(),
            Expression::InfixExpression { operation, .. } => operation.clone(),
            Expression::IfExpression { .. } => "if".to_string(),
            Expression::Function { .. } => "fn".to_string(),
            Expression::CallExpression { .. } => "(".to_string(),
            Expression::IndexExpression { .. } => "[".to_string(),
        }
    }
}

fn join<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Boolean(b) => write!(f, "{}", b),
            Expression::Integer(int) => write!(f, "{}", int),
            Expression::String(st) => write!(f, "\"{}\"", st),
            Expression::Array(exps) => write!(f, "[{}]", join(exps)),
            Expression::Hash(pairs) => {
                write!(f, "{{{}}}", join(pairs.iter().map(|(k, v)| format!("{}: {}", k, v))))
            },
            Expression::PrefixExpression { operation, right } => {
                write!(f, "({}{})", operation, right)
            },
            Expression::InfixExpression { operation, left, right } => {
                write!(f, "({} {} {})", left, operation, right)
            },
            Expression::IfExpression { condition, consequence, alternative } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            },
            Expression::Function { parameters, body } => {
                write!(f, "fn({}){}", join(parameters), body)
            },
            Expression::CallExpression { function, arguments } => {
                write!(f, "{}({})", function, join(arguments))
            },
            Expression::IndexExpression { left, index } => {
                write!(f, "({}[{}])", left, index)
            },
        }
    }
}
