use crate::expr::error::ExprError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
}

impl Function {
    fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "√",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Constant(f64),
    Function(Function),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) | TokenKind::Constant(n) => write!(f, "{}", n),
            TokenKind::Function(func) => write!(f, "{}", func.name()),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset in the source string
    pub pos: usize,
}

/// Split an expression into tokens.
///
/// With `scientific` off only the plain arithmetic alphabet is accepted:
/// digits, `.`, whitespace, `+ - * / ( )`. Scientific mode adds `^`, `×`,
/// `÷`, `π`, `√` and the named functions and constants.
pub fn tokenize(src: &str, scientific: bool) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut end = pos;
            let mut seen_dot = false;
            let mut seen_digit = false;
            while let Some(&(i, d)) = chars.peek() {
                if d.is_ascii_digit() {
                    seen_digit = true;
                } else if d == '.' && !seen_dot {
                    seen_dot = true;
                } else {
                    break;
                }
                end = i + d.len_utf8();
                chars.next();
            }
            if !seen_digit {
                return Err(ExprError::UnexpectedChar('.', pos));
            }
            let value = src[pos..end]
                .parse::<f64>()
                .map_err(|_| ExprError::UnexpectedToken(src[pos..end].to_string(), pos))?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                pos,
            });
            continue;
        }

        if scientific && c.is_ascii_alphabetic() {
            let mut end = pos;
            while let Some(&(i, d)) = chars.peek() {
                if !d.is_ascii_alphabetic() {
                    break;
                }
                end = i + d.len_utf8();
                chars.next();
            }
            let name = &src[pos..end];
            let kind = match name.to_ascii_lowercase().as_str() {
                "sin" => TokenKind::Function(Function::Sin),
                "cos" => TokenKind::Function(Function::Cos),
                "tan" => TokenKind::Function(Function::Tan),
                "log" => TokenKind::Function(Function::Log),
                "ln" => TokenKind::Function(Function::Ln),
                "sqrt" => TokenKind::Function(Function::Sqrt),
                "pi" => TokenKind::Constant(std::f64::consts::PI),
                "e" => TokenKind::Constant(std::f64::consts::E),
                _ => return Err(ExprError::UnknownName(name.to_string(), pos)),
            };
            tokens.push(Token { kind, pos });
            continue;
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '^' if scientific => TokenKind::Caret,
            '×' if scientific => TokenKind::Star,
            '÷' if scientific => TokenKind::Slash,
            'π' if scientific => TokenKind::Constant(std::f64::consts::PI),
            '√' if scientific => TokenKind::Function(Function::Sqrt),
            other => return Err(ExprError::UnexpectedChar(other, pos)),
        };
        tokens.push(Token { kind, pos });
        chars.next();
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str, scientific: bool) -> Vec<TokenKind> {
        tokenize(src, scientific)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_arithmetic() {
        assert_eq!(
            kinds("12 + .5*(3)", false),
            vec![
                TokenKind::Number(12.0),
                TokenKind::Plus,
                TokenKind::Number(0.5),
                TokenKind::Star,
                TokenKind::LParen,
                TokenKind::Number(3.0),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_arithmetic_mode_rejects_scientific_symbols() {
        assert_eq!(
            tokenize("2^3", false),
            Err(ExprError::UnexpectedChar('^', 1))
        );
        assert_eq!(
            tokenize("sin(1)", false),
            Err(ExprError::UnexpectedChar('s', 0))
        );
    }

    #[test]
    fn test_tokenize_scientific() {
        assert_eq!(
            kinds("√9×π", true),
            vec![
                TokenKind::Function(Function::Sqrt),
                TokenKind::Number(9.0),
                TokenKind::Star,
                TokenKind::Constant(std::f64::consts::PI),
            ]
        );
        assert!(matches!(
            tokenize("foo(2)", true),
            Err(ExprError::UnknownName(name, 0)) if name == "foo"
        ));
    }

    #[test]
    fn test_lone_dot_is_rejected() {
        assert_eq!(tokenize("1 + .", false), Err(ExprError::UnexpectedChar('.', 4)));
    }
}
