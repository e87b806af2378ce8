pub mod calc;
pub mod config;
pub mod contact;
pub mod currency;
pub mod expr;
pub mod query;
pub mod shell;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
