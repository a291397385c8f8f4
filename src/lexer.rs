use log::trace;

use super::token::{look_up_ident, Token, TokenType};

/// Pull-based scanner: every call to [`Lexer::next_token`] yields one token.
/// Once the input is exhausted it keeps yielding `Eof`.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut l = Lexer {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
        };
        l.read_char();
        l
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_white_space();

        let ch = match self.ch {
            None => return Token::new(TokenType::Eof, ""),
            Some(ch) => ch,
        };

        let tok = match ch {
            '=' => self.one_or_two(TokenType::Assign, TokenType::Eq),
            '!' => self.one_or_two(TokenType::Bang, TokenType::NotEq),
            '+' => new_token(TokenType::Plus, ch),
            '-' => new_token(TokenType::Minus, ch),
            '*' => new_token(TokenType::Asterisk, ch),
            '/' => new_token(TokenType::Slash, ch),
            '<' => new_token(TokenType::Lt, ch),
            '>' => new_token(TokenType::Gt, ch),
            ';' => new_token(TokenType::Semicolon, ch),
            ':' => new_token(TokenType::Colon, ch),
            ',' => new_token(TokenType::Comma, ch),
            '{' => new_token(TokenType::LBrace, ch),
            '}' => new_token(TokenType::RBrace, ch),
            '(' => new_token(TokenType::LParen, ch),
            ')' => new_token(TokenType::RParen, ch),
            '[' => new_token(TokenType::LBracket, ch),
            ']' => new_token(TokenType::RBracket, ch),
            '"' => Token::new(TokenType::String, self.read_string()),
            _ => if is_letter(ch) {
                let literal = self.read_identifier();
                let tok = Token::new(look_up_ident(&literal), literal);
                trace!("token {}", tok);
                return tok;
            } else if is_digit(ch) {
                let tok = Token::new(TokenType::Int, self.read_number());
                trace!("token {}", tok);
                return tok;
            } else {
                new_token(TokenType::Illegal, ch)
            },
        };
        self.read_char();

        trace!("token {}", tok);
        tok
    }

    fn one_or_two(&mut self, single: TokenType, double: TokenType) -> Token {
        if self.peek_char() == Some('=') {
            let first = self.ch.unwrap_or_default();
            self.read_char();
            let mut literal = first.to_string();
            literal.push('=');
            Token::new(double, literal)
        } else {
            Token::new(single, self.ch.map(String::from).unwrap_or_default())
        }
    }

    fn skip_white_space(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        self.slice(position, self.position)
    }

    fn read_number(&mut self) -> String {
        let position = self.position;
        while self.ch.is_some_and(is_digit) {
            self.read_char();
        }
        self.slice(position, self.position)
    }

    // No escape sequences: the literal is the raw text up to the next quote,
    // or up to end of input when the string is unterminated.
    fn read_string(&mut self) -> String {
        let position = self.position + 1;
        loop {
            self.read_char();
            if matches!(self.ch, Some('"') | None) {
                break;
            }
        }
        self.slice(position, self.position)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.input.len());
        self.input[start..end].iter().collect()
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn new_token(token_type: TokenType, ch: char) -> Token {
    Token::new(token_type, ch)
}
