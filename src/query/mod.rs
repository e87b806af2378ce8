pub mod error;
pub mod formatter;
pub mod interpreter;
pub mod keywords;
pub mod result;
pub mod rules;


pub use error::QueryError;
pub use formatter::*;
pub use interpreter::interpret;
pub use keywords::{describe, keywords_for, match_calculator};
pub use result::InterpretedResult;
