use crate::expr::{evaluate_with, format_number, AngleMode, EvalOptions};
use tracing::debug;

/// Keypad layout, row by row
pub const SCIENTIFIC_BUTTONS: [&str; 29] = [
    "C", "⌫", "sin", "cos", "tan", "(", ")", "log", "ln", "^", "7", "8", "9", "÷", "√", "4", "5",
    "6", "×", "π", "1", "2", "3", "-", "e", "0", ".", "=", "+",
];

const ERROR_DISPLAY: &str = "Error";

/// Labels that extend whatever is on the display instead of replacing a
/// lone zero.
const BINARY_SUFFIXES: [&str; 6] = ["+", "-", "×", "÷", "^", "."];

/// Expression-entry calculator: buttons append text to the display and `=`
/// evaluates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScientificCalculator {
    display: String,
    angle: AngleMode,
}

impl Default for ScientificCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScientificCalculator {
    pub fn new() -> Self {
        ScientificCalculator {
            display: "0".to_string(),
            angle: AngleMode::Radians,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn angle(&self) -> AngleMode {
        self.angle
    }

    pub fn set_angle(&mut self, angle: AngleMode) {
        self.angle = angle;
    }

    /// Flip between RAD and DEG
    pub fn toggle_angle(&mut self) -> AngleMode {
        self.angle = match self.angle {
            AngleMode::Radians => AngleMode::Degrees,
            AngleMode::Degrees => AngleMode::Radians,
        };
        self.angle
    }

    pub fn press(&mut self, button: &str) -> &str {
        match button {
            "C" => self.display = "0".to_string(),
            "⌫" => {
                if self.display == ERROR_DISPLAY {
                    self.display = "0".to_string();
                } else {
                    self.display.pop();
                    if self.display.is_empty() {
                        self.display = "0".to_string();
                    }
                }
            }
            "=" => self.evaluate(),
            other => {
                let fresh = self.display == ERROR_DISPLAY
                    || (self.display == "0" && !BINARY_SUFFIXES.contains(&other));
                if fresh {
                    self.display = other.to_string();
                } else {
                    self.display.push_str(other);
                }
            }
        }
        &self.display
    }

    fn evaluate(&mut self) {
        let options = EvalOptions::scientific(self.angle);
        self.display = match evaluate_with(&self.display, &options) {
            Ok(value) => format_number(value),
            Err(e) => {
                debug!(expression = %self.display, error = %e, "scientific evaluation failed");
                ERROR_DISPLAY.to_string()
            }
        };
    }
}
