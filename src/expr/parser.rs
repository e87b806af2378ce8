use crate::expr::error::ExprError;
use crate::expr::lexer::{tokenize, Function, Token, TokenKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EvalOptions {
    /// Enables `^`, `×`, `÷`, constants and functions
    pub scientific: bool,
    pub angle: AngleMode,
}

impl EvalOptions {
    pub fn scientific(angle: AngleMode) -> Self {
        Self {
            scientific: true,
            angle,
        }
    }
}

/// Evaluate a plain arithmetic expression: `+ - * / ( )` and decimal literals.
pub fn evaluate(src: &str) -> Result<f64, ExprError> {
    evaluate_with(src, &EvalOptions::default())
}

pub fn evaluate_with(src: &str, options: &EvalOptions) -> Result<f64, ExprError> {
    let tokens = tokenize(src, options.scientific)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        options,
    };
    let value = parser.parse_expr()?;

    if let Some(token) = parser.peek() {
        return Err(match token.kind {
            TokenKind::RParen => ExprError::UnbalancedParen(token.pos),
            ref kind => ExprError::UnexpectedToken(kind.to_string(), token.pos),
        });
    }

    finite(value)
}

/// Nesting limit for parentheses, unary signs and function operands
pub const MAX_DEPTH: usize = 256;

// Grammar, lowest precedence first:
//   expr    := term (('+' | '-') term)*
//   term    := unary (('*' | '/') unary)*
//   unary   := ('+' | '-') unary | power
//   power   := primary ('^' unary)?
//   primary := number | constant | function operand | '(' expr ')'
struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    options: &'a EvalOptions,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    // Every recursive cycle of the grammar passes through parse_unary or
    // parse_operand, so guarding those two bounds the stack.
    fn descend<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ExprError>,
    ) -> Result<T, ExprError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExprError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn parse_expr(&mut self) -> Result<f64, ExprError> {
        let mut acc = self.parse_term()?;
        loop {
            match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => {
                    self.pos += 1;
                    acc = finite(acc + self.parse_term()?)?;
                }
                Some(TokenKind::Minus) => {
                    self.pos += 1;
                    acc = finite(acc - self.parse_term()?)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn parse_term(&mut self) -> Result<f64, ExprError> {
        let mut acc = self.parse_unary()?;
        loop {
            match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => {
                    self.pos += 1;
                    acc = finite(acc * self.parse_unary()?)?;
                }
                Some(TokenKind::Slash) => {
                    self.pos += 1;
                    let divisor = self.parse_unary()?;
                    if divisor == 0.0 {
                        return Err(ExprError::DivisionByZero);
                    }
                    acc = finite(acc / divisor)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn parse_unary(&mut self) -> Result<f64, ExprError> {
        self.descend(Self::parse_signed)
    }

    fn parse_signed(&mut self) -> Result<f64, ExprError> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Minus) => {
                self.pos += 1;
                finite(-self.parse_unary()?)
            }
            Some(TokenKind::Plus) => {
                self.pos += 1;
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<f64, ExprError> {
        let base = self.parse_primary()?;
        if let Some(TokenKind::Caret) = self.peek().map(|t| &t.kind) {
            self.pos += 1;
            // Right-associative: 2^3^2 = 2^9
            let exponent = self.parse_unary()?;
            return finite(base.powf(exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<f64, ExprError> {
        let token = self.next().ok_or(ExprError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(n) | TokenKind::Constant(n) => finite(n),
            TokenKind::Function(func) => {
                let operand = self.parse_operand()?;
                self.apply(func, operand)
            }
            TokenKind::LParen => {
                let value = self.parse_expr()?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(value),
                    Some(other) => Err(ExprError::UnexpectedToken(
                        other.kind.to_string(),
                        other.pos,
                    )),
                    None => Err(ExprError::UnbalancedParen(token.pos)),
                }
            }
            other => Err(ExprError::UnexpectedToken(other.to_string(), token.pos)),
        }
    }

    // A function binds to the next primary so that sin(30)^2 squares the sine
    fn parse_operand(&mut self) -> Result<f64, ExprError> {
        self.descend(|parser| match parser.peek().map(|t| &t.kind) {
            Some(TokenKind::Minus) => {
                parser.pos += 1;
                finite(-parser.parse_operand()?)
            }
            _ => parser.parse_primary(),
        })
    }

    fn apply(&self, func: Function, operand: f64) -> Result<f64, ExprError> {
        let angle = |x: f64| match self.options.angle {
            AngleMode::Radians => x,
            AngleMode::Degrees => x.to_radians(),
        };
        let value = match func {
            Function::Sin => angle(operand).sin(),
            Function::Cos => angle(operand).cos(),
            Function::Tan => angle(operand).tan(),
            Function::Log => operand.log10(),
            Function::Ln => operand.ln(),
            Function::Sqrt => operand.sqrt(),
        };
        finite(value)
    }
}

fn finite(value: f64) -> Result<f64, ExprError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExprError::NonFinite)
    }
}
