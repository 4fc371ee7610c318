//! Error types for launch_mapper

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("root element is <{found}>, expected <launch>")]
    MalformedRoot { found: String },

    #[error("XML parsing error: {0}")]
    XmlError(#[from] roxmltree::Error),

    #[error("unterminated substitution marker in '{text}' (missing ')')")]
    UnterminatedSubstitution { text: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("undefined variable: '{0}'. Pass it on the command line as name:=value")]
    UndefinedVariable(String),

    #[error("package '{0}' not found. Register its root with --pkg {0}=path")]
    PackageNotFound(String),

    #[error("unsupported substitution keyword '{0}' in include reference")]
    UnsupportedKeyword(String),

    #[error("unterminated substitution marker in '{0}' (missing ')')")]
    Unterminated(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
