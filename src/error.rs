use thiserror::Error;

use crate::matcher::MatchError;
use crate::parser::ParserError;
use crate::template::TemplateError;
use crate::tree::TreeError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Match error: {0}")]
    Match(#[from] MatchError),
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}
