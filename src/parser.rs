use core::fmt;
use std::fmt::Formatter;

use log::debug;

use crate::ast::{BlockStatement, Expression, Identifier, Program, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

#[derive(Ord, PartialOrd, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Precedence {
    Lowest,
    Equals, // ==
    LessGreater, // > <
    Sum, // +, -
    Product, // *, /
    Prefix, // -X, !X
    Call,
    Index
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self {
            Precedence::Lowest => write!(f, "LOWEST"),
            Precedence::Equals => write!(f, "EQUALS"),
            Precedence::LessGreater => write!(f, "LESSGREATER"),
            Precedence::Sum => write!(f, "SUM"),
            Precedence::Product => write!(f, "PRODUCT"),
            Precedence::Prefix => write!(f, "PREFIX"),
            Precedence::Call => write!(f, "CALL"),
            Precedence::Index => write!(f, "INDEX")
        }
    }
}

fn get_precedence(token: TokenType) -> Option<Precedence> {
    match token {
        TokenType::Eq | TokenType::NotEq => Some(Precedence::Equals),
        TokenType::Lt | TokenType::Gt => Some(Precedence::LessGreater),
        TokenType::Plus | TokenType::Minus => Some(Precedence::Sum),
        TokenType::Asterisk | TokenType::Slash => Some(Precedence::Product),
        TokenType::LParen => Some(Precedence::Call),
        TokenType::LBracket => Some(Precedence::Index),
        _ => None
    }
}

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

fn prefix_parse_fn(token: TokenType) -> Option<PrefixParseFn> {
    let f: PrefixParseFn = match token {
        TokenType::Ident => Parser::parse_identifier,
        TokenType::Int => Parser::parse_integer_literal,
        TokenType::String => Parser::parse_string_literal,
        TokenType::Minus | TokenType::Bang => Parser::parse_prefix_expression,
        TokenType::True | TokenType::False => Parser::parse_boolean,
        TokenType::LParen => Parser::parse_grouped_expression,
        TokenType::LBracket => Parser::parse_array_literal,
        TokenType::LBrace => Parser::parse_hash_literal,
        TokenType::If => Parser::parse_if_expression,
        TokenType::Function => Parser::parse_function_literal,
        _ => return None,
    };
    Some(f)
}

fn infix_parse_fn(token: TokenType) -> Option<InfixParseFn> {
    let f: InfixParseFn = match token {
        TokenType::Plus | TokenType::Minus | TokenType::Asterisk | TokenType::Slash |
            TokenType::Eq | TokenType::NotEq | TokenType::Lt | TokenType::Gt => Parser::parse_infix_expression,
        TokenType::LParen => Parser::parse_call_expression,
        TokenType::LBracket => Parser::parse_index_expression,
        _ => return None,
    };
    Some(f)
}

/// Pratt parser over a [`Lexer`]. Malformed input never aborts the parse:
/// each failure records a diagnostic, drops the enclosing statement and
/// parsing resumes with the next token.
pub struct Parser {
    l: Lexer,
    errors: Vec<String>,

    cur_token: Token,
    peek_token: Token,
}

impl Parser {

    pub fn new(mut l: Lexer) -> Self {
        let cur_token = l.next_token();
        let peek_token = l.next_token();
        Parser {
            l,
            errors: Vec::new(),
            cur_token,
            peek_token,
        }
    }

    fn next_token(&mut self) {
        let next = self.l.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn cur_token_is(&self, t: TokenType) -> bool {
        self.cur_token.token_type == t
    }

    fn peek_token_is(&self, t: TokenType) -> bool {
        self.peek_token.token_type == t
    }

    fn expect_peek(&mut self, t: TokenType) -> bool {
        if self.peek_token_is(t) {
            self.next_token();
            true
        } else {
            self.peek_error(t);
            false
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    fn peek_error(&mut self, t: TokenType) {
        self.errors.push(format!("expected next token to be {}, got {} instead",
            t, self.peek_token.token_type))
    }

    fn no_prefix_fn_error(&mut self, t: TokenType) {
        self.errors.push(format!("no prefix parse function for {} found", t))
    }

    pub fn parse_program(&mut self) -> Program {
        let mut p = Program::default();

        while !self.cur_token_is(TokenType::Eof) {
            match self.parse_statement() {
                Some(s) => p.statements.push(s),
                None => debug!("dropped statement ending at {}", self.cur_token),
            }
            self.next_token();
        }
        p
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.token_type {
            TokenType::Let => self.parse_let_statement(),
            TokenType::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement()
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenType::Ident) {
            return None;
        }

        let identifier = Identifier::new(self.cur_token.literal.clone());

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenType::Semicolon) {
            self.next_token();
        }
        Some(Statement::LetStatement { identifier, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let ret_val = self.parse_expression(Precedence::Lowest)?;
        if self.peek_token_is(TokenType::Semicolon) {
            self.next_token();
        }
        Some(Statement::ReturnStatement(ret_val))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenType::Semicolon) {
            self.next_token();
        }
        Some(Statement::ExpressionStatement(expression))
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let prefix = match prefix_parse_fn(self.cur_token.token_type) {
            Some(prefix) => prefix,
            None => {
                self.no_prefix_fn_error(self.cur_token.token_type);
                return None;
            }
        };
        let mut left_exp = prefix(self)?;

        while !self.peek_token_is(TokenType::Semicolon) && precedence < self.peek_precedence() {
            let infix = match infix_parse_fn(self.peek_token.token_type) {
                Some(infix) => infix,
                None => return Some(left_exp),
            };
            self.next_token();
            left_exp = infix(self, left_exp)?;
        }
        Some(left_exp)
    }

    fn peek_precedence(&self) -> Precedence {
        get_precedence(self.peek_token.token_type).unwrap_or(Precedence::Lowest)
    }

    fn cur_precedence(&self) -> Precedence {
        get_precedence(self.cur_token.token_type).unwrap_or(Precedence::Lowest)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(self.cur_token.literal.clone())))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(value)),
            Err(_) => {
                let msg = format!("could not parse {} as integer", self.cur_token.literal);
                self.errors.push(msg);
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::String(self.cur_token.literal.clone()))
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.cur_token_is(TokenType::True)))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let op = self.cur_token.literal.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::PrefixExpression {
            operation: op,
            right: Box::new(right)
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let op = self.cur_token.literal.clone();

        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expression::InfixExpression {
            operation: op,
            left: Box::new(left),
            right: Box::new(right)
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let exp = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        Some(exp)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenType::Else) {
            self.next_token();
            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    // Consumes statements up to the closing brace, which is left as the
    // current token. A missing brace ends the block at end of input.
    fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        self.next_token();
        while !self.cur_token_is(TokenType::RBrace) && !self.cur_token_is(TokenType::Eof) {
            if let Some(st) = self.parse_statement() {
                block.statements.push(st);
            }
            self.next_token();
        }
        block
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::Function { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();
        if self.peek_token_is(TokenType::RParen) {
            self.next_token();
            return Some(params);
        }

        if !self.expect_peek(TokenType::Ident) {
            return None;
        }
        params.push(Identifier::new(self.cur_token.literal.clone()));

        while self.peek_token_is(TokenType::Comma) {
            self.next_token();
            if !self.expect_peek(TokenType::Ident) {
                return None;
            }
            params.push(Identifier::new(self.cur_token.literal.clone()));
        }

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        Some(params)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let args = self.parse_expression_list(TokenType::RParen)?;
        Some(Expression::CallExpression { function: Box::new(function), arguments: args })
    }

    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = Vec::new();
        if self.peek_token_is(end) {
            self.next_token();
            return Some(list)
        }
        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }
        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(TokenType::RBracket)?;
        Some(Expression::Array(elements))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RBracket) {
            return None;
        }

        Some(Expression::IndexExpression { left: Box::new(left), index: Box::new(index) })
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_token_is(TokenType::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;
            if !self.expect_peek(TokenType::Colon) {
                return None;
            }

            self.next_token();

            let value = self.parse_expression(Precedence::Lowest)?;
            if !self.peek_token_is(TokenType::RBrace) && !self.expect_peek(TokenType::Comma) {
                return None;
            }

            pairs.push((key, value));
        }

        if !self.expect_peek(TokenType::RBrace) {
            return None;
        }
        Some(Expression::Hash(pairs))
    }
}

/// Parses a whole source text, returning the program and its diagnostics.
pub fn parse(input: &str) -> (Program, Vec<String>) {
    let mut p = Parser::new(Lexer::new(input));
    let program = p.parse_program();
    (program, p.into_errors())
}


#[cfg(test)]
mod test {
    use crate::ast::{BlockStatement, Expression, Identifier, Program, Statement};
    use crate::parser::parse;

    fn parse_ok(input: &str) -> Program {
        let (program, errors) = parse(input);
        assert!(errors.is_empty(), "parser has {} errors for {:?}: {:?}", errors.len(), input, errors);
        program
    }

    fn ident(name: &str) -> Expression {
        Expression::Identifier(Identifier::new(name))
    }

    fn infix(left: Expression, operation: &str, right: Expression) -> Expression {
        Expression::InfixExpression {
            operation: operation.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn single_expression(input: &str) -> Expression {
        let program = parse_ok(input);
        assert_eq!(program.statements.len(), 1, "input {:?}", input);
        match &program.statements[0] {
            Statement::ExpressionStatement(exp) => exp.clone(),
            other => panic!("not expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_let_statement() {
        struct Test<'a> {
            input: &'a str,
            exp_identifier: &'a str,
            exp_value: Expression
        }
        let tests = vec![
            Test {input: "let x = 5;", exp_identifier: "x", exp_value: Expression::Integer(5)},
            Test {input: "let y = true;", exp_identifier: "y", exp_value: Expression::Boolean(true)},
            Test {input: "let foobar = y", exp_identifier: "foobar", exp_value: ident("y")},
        ];

        for test in tests {
            let program = parse_ok(test.input);
            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::LetStatement { identifier, value } => {
                    assert_eq!(identifier.value, test.exp_identifier);
                    assert_eq!(value, &test.exp_value);
                },
                _ => panic!("not let statement")
            }
        }
    }

    #[test]
    fn test_return_statement() {
        let tests = vec![
            ("return true;", Expression::Boolean(true)),
            ("return 5;", Expression::Integer(5)),
            ("return foobar", ident("foobar")),
        ];

        for (input, expected) in tests {
            let program = parse_ok(input);
            assert_eq!(program.statements, vec![Statement::ReturnStatement(expected)]);
        }
    }

    #[test]
    fn test_let_statement_errors() {
        let (program, errors) = parse("let = 5; let x 5; let y = 10;");
        assert_eq!(errors, vec![
            "expected next token to be IDENT, got = instead".to_string(),
            "no prefix parse function for = found".to_string(),
            "expected next token to be =, got INT instead".to_string(),
        ]);
        // the parser resynchronises and still reads the trailing statements
        assert_eq!(program.to_string(), "5; 5; let y = 10;");
    }

    #[test]
    fn test_no_prefix_parse_function() {
        let (_, errors) = parse("@");
        assert_eq!(errors, vec!["no prefix parse function for ILLEGAL found".to_string()]);

        let (_, errors) = parse("return;");
        assert_eq!(errors, vec!["no prefix parse function for ; found".to_string()]);
    }

    #[test]
    fn test_integer_overflow_is_reported() {
        let (program, errors) = parse("99999999999999999999");
        assert!(program.statements.is_empty());
        assert_eq!(errors, vec!["could not parse 99999999999999999999 as integer".to_string()]);
    }

    #[test]
    fn test_parsing_prefix_expressions() {
        let tests = vec![
            ("!5;", "!", Expression::Integer(5)),
            ("-15;", "-", Expression::Integer(15)),
            ("!true;", "!", Expression::Boolean(true)),
            ("!false;", "!", Expression::Boolean(false)),
        ];

        for (input, exp_operator, exp_value) in tests {
            match single_expression(input) {
                Expression::PrefixExpression { operation, right } => {
                    assert_eq!(operation, exp_operator);
                    assert_eq!(*right, exp_value);
                },
                _ => panic!("not prefix expression")
            }
        }
    }

    #[test]
    fn test_parsing_infix_expressions() {
        struct Test<'a> {
            input: &'a str,
            exp_left: Expression,
            exp_operator: &'a str,
            exp_right: Expression,
        }
        let tests = vec![
            Test {input: "5+3;", exp_left: Expression::Integer(5), exp_operator: "+", exp_right: Expression::Integer(3)},
            Test {input: "5-3;", exp_left: Expression::Integer(5), exp_operator: "-", exp_right: Expression::Integer(3)},
            Test {input: "5*3;", exp_left: Expression::Integer(5), exp_operator: "*", exp_right: Expression::Integer(3)},
            Test {input: "5/3;", exp_left: Expression::Integer(5), exp_operator: "/", exp_right: Expression::Integer(3)},
            Test {input: "5<3;", exp_left: Expression::Integer(5), exp_operator: "<", exp_right: Expression::Integer(3)},
            Test {input: "5>3;", exp_left: Expression::Integer(5), exp_operator: ">", exp_right: Expression::Integer(3)},
            Test {input: "5==3;", exp_left: Expression::Integer(5), exp_operator: "==", exp_right: Expression::Integer(3)},
            Test {input: "5!=3;", exp_left: Expression::Integer(5), exp_operator: "!=", exp_right: Expression::Integer(3)},
            Test {input: "foo!=bar", exp_left: ident("foo"), exp_operator: "!=", exp_right: ident("bar")},
            Test {input: "true==false", exp_left: Expression::Boolean(true), exp_operator: "==", exp_right: Expression::Boolean(false)},
        ];

        for test in tests {
            assert_eq!(single_expression(test.input), infix(test.exp_left, test.exp_operator, test.exp_right));
        }
    }

    #[test]
    fn test_operator_precedence() {
        struct Test<'a> {
            input: &'a str,
            expected: &'a str,
        }
        let tests = vec![
            Test {input: "-a * b", expected: "((-a) * b)"},
            Test {input: "!-a", expected: "(!(-a))"},
            Test {input: "a + b + c", expected: "((a + b) + c)"},
            Test {input: "a + b - c", expected: "((a + b) - c)"},
            Test {input: "a * b * c", expected: "((a * b) * c)"},
            Test {input: "a * b / c", expected: "((a * b) / c)"},
            Test {input: "a + b / c", expected: "(a + (b / c))"},
            Test {input: "a + b * c + d / e - f", expected: "(((a + (b * c)) + (d / e)) - f)"},
            Test {input: "3 + 4; -5 * 5", expected: "(3 + 4); ((-5) * 5)"},
            Test {input: "5 > 4 == 3 < 4", expected: "((5 > 4) == (3 < 4))"},
            Test {input: "((5 < 4) != (3 > 4))", expected: "((5 < 4) != (3 > 4))"},
            Test {input: "3 + 4 * 5 == 3 * 1 + 4 * 5", expected: "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"},
            Test {input: "3 > 5 == false", expected: "((3 > 5) == false)"},
            Test {input: "1 + (2 + 3) + 4", expected: "((1 + (2 + 3)) + 4)"},
            Test {input: "(5 + 5) * 2", expected: "((5 + 5) * 2)"},
            Test {input: "2 / (5 + 5)", expected: "(2 / (5 + 5))"},
            Test {input: "-(5 + 5)", expected: "(-(5 + 5))"},
            Test {input: "!(true == true)", expected: "(!(true == true))"},
            Test {input: "a + add(b * c) + d", expected: "((a + add((b * c))) + d)"},
            Test {input: "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))", expected: "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"},
            Test {input: "add(a + b + c * d / f + g)", expected: "add((((a + b) + ((c * d) / f)) + g))"},
            Test {input: "a * [1, 2, 3, 4][b * c] * d", expected: "((a * ([1, 2, 3, 4][(b * c)])) * d)"},
            Test {input: "add(a * b[2], b[1], 2 * [1, 2][1])", expected: "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"},
        ];

        for test in tests {
            let program = parse_ok(test.input);
            assert_eq!(program.to_string(), test.expected, "input {:?}", test.input);
        }
    }

    #[test]
    fn test_if_expression() {
        let tests = vec![
            ("if (x < y) { x }", None),
            ("if (x < y) { x } else { y }", Some(BlockStatement { statements: vec![Statement::ExpressionStatement(ident("y"))] })),
        ];

        for (input, alternative) in tests {
            let expected = Expression::IfExpression {
                condition: Box::new(infix(ident("x"), "<", ident("y"))),
                consequence: BlockStatement { statements: vec![Statement::ExpressionStatement(ident("x"))] },
                alternative,
            };
            assert_eq!(single_expression(input), expected);
        }
    }

    #[test]
    fn test_function_literal() {
        let expected = Expression::Function {
            parameters: vec![Identifier::new("x"), Identifier::new("y")],
            body: BlockStatement {
                statements: vec![Statement::ExpressionStatement(infix(ident("x"), "+", ident("y")))],
            },
        };
        assert_eq!(single_expression("fn(x, y) { x + y; }"), expected);
    }

    #[test]
    fn test_function_parameters() {
        let tests = vec![
            ("fn() {};", vec![]),
            ("fn(x) {};", vec!["x"]),
            ("fn(x, y, z) {};", vec!["x", "y", "z"]),
        ];

        for (input, expected) in tests {
            match single_expression(input) {
                Expression::Function { parameters, .. } => {
                    let names: Vec<_> = parameters.iter().map(|p| p.value.as_str()).collect();
                    assert_eq!(names, expected);
                },
                _ => panic!("not function literal")
            }
        }
    }

    #[test]
    fn test_function_parameters_must_be_identifiers() {
        let (_, errors) = parse("fn(1) {}");
        assert_eq!(errors[0], "expected next token to be IDENT, got INT instead");
    }

    #[test]
    fn test_call_expression() {
        let expected = Expression::CallExpression {
            function: Box::new(ident("add")),
            arguments: vec![
                Expression::Integer(1),
                infix(Expression::Integer(2), "*", Expression::Integer(3)),
                infix(Expression::Integer(4), "+", Expression::Integer(5)),
            ],
        };
        assert_eq!(single_expression("add(1, 2 * 3, 4 + 5);"), expected);
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(single_expression("\"hello world\""), Expression::String("hello world".to_string()));
    }

    #[test]
    fn test_array_literal() {
        let expected = Expression::Array(vec![
            Expression::Integer(1),
            infix(Expression::Integer(2), "*", Expression::Integer(2)),
            infix(Expression::Integer(3), "+", Expression::Integer(3)),
        ]);
        assert_eq!(single_expression("[1, 2 * 2, 3 + 3]"), expected);
        assert_eq!(single_expression("[]"), Expression::Array(vec![]));
    }

    #[test]
    fn test_index_expression() {
        let expected = Expression::IndexExpression {
            left: Box::new(ident("myArray")),
            index: Box::new(infix(Expression::Integer(1), "+", Expression::Integer(1))),
        };
        assert_eq!(single_expression("myArray[1 + 1]"), expected);
    }

    #[test]
    fn test_hash_literal() {
        let string = |s: &str| Expression::String(s.to_string());
        let expected = Expression::Hash(vec![
            (string("one"), infix(Expression::Integer(0), "+", Expression::Integer(1))),
            (string("two"), infix(Expression::Integer(10), "-", Expression::Integer(8))),
            (string("three"), infix(Expression::Integer(15), "/", Expression::Integer(5))),
        ]);
        assert_eq!(single_expression(r#"{"one": 0 + 1, "two": 10 - 8, "three": 15 / 5}"#), expected);
        assert_eq!(single_expression("{}"), Expression::Hash(vec![]));
    }

    #[test]
    fn test_hash_literal_errors() {
        let (_, errors) = parse(r#"{"one" 1}"#);
        assert_eq!(errors[0], "expected next token to be :, got INT instead");
    }

    #[test]
    fn test_unterminated_block_stops_at_eof() {
        let (program, errors) = parse("if (true) { 1");
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 1);
    }
}
