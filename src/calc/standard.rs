use crate::expr::format_number;
use serde::Serialize;
use std::fmt;

const ERROR_DISPLAY: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Dot,
    Op(Operator),
    Equals,
    Clear,
    Backspace,
    Percent,
}

impl Key {
    /// Keypad label to key. Accepts ASCII stand-ins for × and ÷.
    pub fn parse(label: &str) -> Option<Key> {
        let key = match label.trim() {
            "." => Key::Dot,
            "+" => Key::Op(Operator::Add),
            "-" => Key::Op(Operator::Subtract),
            "×" | "*" | "x" => Key::Op(Operator::Multiply),
            "÷" | "/" => Key::Op(Operator::Divide),
            "=" => Key::Equals,
            "C" | "c" => Key::Clear,
            "⌫" | "back" => Key::Backspace,
            "%" => Key::Percent,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Key::Digit(c as u8 - b'0'),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{}", d),
            Key::Dot => f.write_str("."),
            Key::Op(op) => f.write_str(op.symbol()),
            Key::Equals => f.write_str("="),
            Key::Clear => f.write_str("C"),
            Key::Backspace => f.write_str("⌫"),
            Key::Percent => f.write_str("%"),
        }
    }
}

/// Four-function keypad calculator.
///
/// Operators chain left to right: `2 + 3 ×` shows `5` before the next
/// operand is entered.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardCalculator {
    display: String,
    previous: Option<f64>,
    operator: Option<Operator>,
    waiting_for_operand: bool,
}

impl Default for StandardCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardCalculator {
    pub fn new() -> Self {
        StandardCalculator {
            display: "0".to_string(),
            previous: None,
            operator: None,
            waiting_for_operand: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// The pending left operand and operator, e.g. `"12 +"`
    pub fn pending(&self) -> Option<String> {
        match (self.previous, self.operator) {
            (Some(value), Some(op)) => Some(format!("{} {}", format_number(value), op.symbol())),
            _ => None,
        }
    }

    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Dot => self.input_dot(),
            Key::Op(op) => self.input_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => *self = Self::new(),
            Key::Backspace => self.backspace(),
            Key::Percent => {
                let value = self.current_value() / 100.0;
                self.show(value);
            }
        }
        &self.display
    }

    fn input_digit(&mut self, digit: u8) {
        let digit = char::from(b'0' + digit.min(9));
        if self.waiting_for_operand || self.display == "0" || self.display == ERROR_DISPLAY {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else {
            self.display.push(digit);
        }
    }

    fn input_dot(&mut self) {
        if self.waiting_for_operand || self.display == ERROR_DISPLAY {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn input_operator(&mut self, next: Operator) {
        if self.waiting_for_operand && self.operator.is_some() {
            self.operator = Some(next);
            return;
        }

        let input = self.current_value();
        match (self.previous, self.operator) {
            (Some(previous), Some(op)) => {
                let result = op.apply(previous, input);
                if !self.show(result) {
                    return;
                }
                self.previous = Some(result);
            }
            _ => self.previous = Some(input),
        }
        self.operator = Some(next);
        self.waiting_for_operand = true;
    }

    fn equals(&mut self) {
        if let (Some(previous), Some(op)) = (self.previous, self.operator) {
            let result = op.apply(previous, self.current_value());
            self.show(result);
            self.previous = None;
            self.operator = None;
            self.waiting_for_operand = true;
        }
    }

    fn backspace(&mut self) {
        if self.waiting_for_operand || self.display == ERROR_DISPLAY {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Put a result on the display. A non-finite result resets the
    /// pending operation and shows `Error`.
    fn show(&mut self, value: f64) -> bool {
        if value.is_finite() {
            self.display = format_number(value);
            true
        } else {
            self.display = ERROR_DISPLAY.to_string();
            self.previous = None;
            self.operator = None;
            self.waiting_for_operand = true;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &str) -> StandardCalculator {
        let mut calc = StandardCalculator::new();
        for label in keys.split_whitespace() {
            calc.press(Key::parse(label).unwrap());
        }
        calc
    }

    #[test]
    fn test_digits_replace_leading_zero() {
        assert_eq!(run("0 0 7").display(), "7");
        assert_eq!(run("1 2 . 5").display(), "12.5");
        assert_eq!(run(". 5").display(), "0.5");
        assert_eq!(run("1 . . 2").display(), "1.2");
    }

    #[test]
    fn test_chained_operators() {
        let calc = run("2 + 3 ×");
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.pending().as_deref(), Some("5 ×"));
        assert_eq!(run("2 + 3 × 4 =").display(), "20");
    }

    #[test]
    fn test_operator_replaced_while_waiting() {
        assert_eq!(run("6 + - 2 =").display(), "4");
    }

    #[test]
    fn test_equals_then_new_entry() {
        let calc = run("9 ÷ 3 = 4");
        assert_eq!(calc.display(), "4");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn test_percent_and_backspace() {
        assert_eq!(run("5 0 %").display(), "0.5");
        assert_eq!(run("1 2 3 ⌫").display(), "12");
        assert_eq!(run("7 ⌫").display(), "0");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let calc = run("8 ÷ 0 =");
        assert_eq!(calc.display(), "Error");
        assert_eq!(run("8 ÷ 0 = 5").display(), "5");
    }

    #[test]
    fn test_clear() {
        let calc = run("4 + 4 C");
        assert_eq!(calc, StandardCalculator::new());
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("*"), Some(Key::Op(Operator::Multiply)));
        assert_eq!(Key::parse("9"), Some(Key::Digit(9)));
        assert_eq!(Key::parse("12"), None);
        assert_eq!(Key::parse("sin"), None);
    }
}
