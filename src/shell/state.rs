use crate::query::{interpret, InterpretedResult};
use crate::shell::calculator::CalculatorId;
use crate::shell::transcript::{Role, Transcript};
use serde::Serialize;
use std::fmt;

/// A screen of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum Tab {
    Calculator(CalculatorId),
    Contact,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Calculator(CalculatorId::Standard)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Calculator(id) => f.write_str(id.display_name()),
            Tab::Contact => f.write_str("Contact"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Shell {
    active: Tab,
    assistant_open: bool,
    transcript: Transcript,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}

impl Shell {
    pub fn new(active: Tab) -> Self {
        Self {
            active,
            assistant_open: false,
            transcript: Transcript::new(),
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn assistant_open(&self) -> bool {
        self.assistant_open
    }

    pub fn toggle_assistant(&mut self) {
        self.assistant_open = !self.assistant_open;
    }

    pub fn close_assistant(&mut self) {
        self.assistant_open = false;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Send a query through the assistant overlay. Blank input is ignored
    /// (returns `None`) like the empty chat box. A navigation answer switches
    /// the active screen and closes the overlay.
    pub fn ask(&mut self, query: &str) -> Option<InterpretedResult> {
        if query.trim().is_empty() {
            return None;
        }

        self.transcript.push(Role::User, query.to_string(), false);
        let result = interpret(query);
        self.transcript
            .push(Role::Assistant, result.message().to_string(), result.is_error());

        if let Some(target) = result.target() {
            self.active = Tab::Calculator(target);
            self.assistant_open = false;
        }

        Some(result)
    }

    pub fn clear_chat(&mut self) {
        self.transcript.clear();
    }
}
