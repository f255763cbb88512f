//! Tokenizer and recursive descent parser for keypad expressions

use crate::core::{CalcError, CalcResult, Operation};

/// Lexical unit of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Arithmetic operator (binary, or a unary sign for `+`/`-`)
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

/// Deepest `(` or unary-sign nesting the parser accepts
pub const MAX_DEPTH: usize = 256;

/// Parsed expression tree
///
/// Long `+`/`*` chains build trees as deep as they are long, so dropping
/// is done with an explicit stack instead of recursion.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary minus
    Negate(Box<AstNode>),
    /// Unary plus
    Plus(Box<AstNode>),
}

impl AstNode {
    /// Literal leaf
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// `left op right`
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Unary `-`
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }

    /// Unary `+`
    #[must_use]
    pub fn plus(inner: AstNode) -> Self {
        Self::Plus(Box::new(inner))
    }
}

impl AstNode {
    fn take_children(&mut self, out: &mut Vec<Self>) {
        let hollow = || Self::Number(0.0);
        match self {
            Self::Number(_) => {}
            Self::Negate(inner) | Self::Plus(inner) => {
                out.push(std::mem::replace(&mut **inner, hollow()));
            }
            Self::BinaryOp { left, right, .. } => {
                out.push(std::mem::replace(&mut **left, hollow()));
                out.push(std::mem::replace(&mut **right, hollow()));
            }
        }
    }
}

impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

/// Splits expression text into [`Token`]s, skipping whitespace
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Starts at the beginning of `input`
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Reads tokens until the input is exhausted
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Next token, `None` at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' | '-' => {
                self.advance();
                // `++` and `--` read as increment/decrement, which is never valid here
                if self.current_char() == Some(ch) {
                    return Err(CalcError::parse(format!(
                        "Invalid operator sequence: '{ch}{ch}'"
                    )));
                }
                Token::Operator(if ch == '+' {
                    Operation::Add
                } else {
                    Operation::Subtract
                })
            }
            '*' => {
                self.advance();
                Token::Operator(Operation::Multiply)
            }
            '/' => {
                self.advance();
                Token::Operator(Operation::Divide)
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => return Err(CalcError::InvalidCharacter(ch)),
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.pos];
        let value: f64 = literal
            .parse()
            .map_err(|_| CalcError::parse(format!("Invalid number: '{literal}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser over a token stream
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('-' | '+') unary | primary
/// primary    ::= NUMBER | '(' expression ')'
/// ```
///
/// Nesting through `(` and unary signs is capped at [`MAX_DEPTH`].
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Wraps a token stream
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Tokenizes and parses `input`
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses the whole stream; leftover tokens are an error
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::parse(format!(
                "Unexpected {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn nested(&mut self, parse: fn(&mut Self) -> CalcResult<AstNode>) -> CalcResult<AstNode> {
        if self.depth >= MAX_DEPTH {
            return Err(CalcError::parse("Expression nested too deeply"));
        }
        self.depth += 1;
        let node = parse(self);
        self.depth -= 1;
        node
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                self.nested(Self::parse_unary).map(AstNode::negate)
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.nested(Self::parse_unary).map(AstNode::plus)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .cloned()
            .ok_or_else(|| CalcError::parse("Unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(AstNode::number(n)),
            Token::LeftParen => {
                let expr = self.nested(Self::parse_expression)?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::parse(format!("Expected ')' but found {t:?}"))),
                    None => Err(CalcError::parse("Unclosed parenthesis")),
                }
            }
            other => Err(CalcError::parse(format!("Unexpected token: {other:?}"))),
        }
    }
}
