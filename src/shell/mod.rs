// State of the tabbed front end: which screen is active and the assistant's
// chat transcript. Owned by whoever drives the UI; there is no global instance.

pub mod calculator;
pub mod state;
pub mod transcript;

pub use calculator::{CalculatorId, UnknownCalculator};
pub use state::{Shell, Tab};
pub use transcript::{Message, Role, Transcript, GREETING};
