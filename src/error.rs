use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Overflow: {a} + {b} does not fit in i32")]
    Overflow { a: i32, b: i32 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    pub fn overflow(a: i32, b: i32) -> Self {
        Self::Overflow { a, b }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
