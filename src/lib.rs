pub mod arith;
pub mod cases;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;

pub use arith::{add, checked_add};
