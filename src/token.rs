use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Clone, Copy)]
pub enum TokenType {
    Illegal,
    Eof,

    Ident,
    Int,
    String,

    Assign,
    Plus,
    Minus,
    Bang, // !
    Asterisk,
    Slash,

    Lt,
    Gt,
    Eq,
    NotEq,

    Comma,
    Semicolon,
    Colon,

    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }
    LBracket, // [
    RBracket, // ]

    // keywords
    Function, // fn
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}",
            match &self {
                TokenType::Illegal => "ILLEGAL",
                TokenType::Eof => "EOF",
                TokenType::Ident => "IDENT",
                TokenType::Int => "INT",
                TokenType::String => "STRING",
                TokenType::Assign => "=",
                TokenType::Plus => "+",
                TokenType::Minus => "-",
                TokenType::Bang => "!",
                TokenType::Asterisk => "*",
                TokenType::Slash => "/",
                TokenType::Lt => "<",
                TokenType::Gt => ">",
                TokenType::Eq => "==",
                TokenType::NotEq => "!=",
                TokenType::Comma => ",",
                TokenType::Semicolon => ";",
                TokenType::Colon => ":",
                TokenType::LParen => "(",
                TokenType::RParen => ")",
                TokenType::LBrace => "{",
                TokenType::RBrace => "}",
                TokenType::LBracket => "[",
                TokenType::RBracket => "]",
                TokenType::Function => "FUNCTION",
                TokenType::Let => "LET",
                TokenType::True => "TRUE",
                TokenType::False => "FALSE",
                TokenType::If => "IF",
                TokenType::Else => "ELSE",
                TokenType::Return => "RETURN",
            }
        )
    }
}

/// One lexeme. `literal` is the scanned source text; operators and keywords
/// carry their canonical spelling and end of input carries an empty literal.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
}

impl Token {
    pub fn new(token_type: TokenType, literal: impl Into<String>) -> Self {
        Token { token_type, literal: literal.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.token_type, self.literal)
    }
}

pub fn look_up_ident(ident: &str) -> TokenType {
    match ident {
        "fn" => TokenType::Function,
        "let" => TokenType::Let,
        "true" => TokenType::True,
        "false" => TokenType::False,
        "if" => TokenType::If,
        "else" => TokenType::Else,
        "return" => TokenType::Return,
        _ => TokenType::Ident,
    }
}
