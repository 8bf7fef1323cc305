//! Shell-boundary input coercion.
//!
//! The store accepts already-typed values and performs no validation of its
//! own; required-field checks and text-to-number coercion happen here, in
//! the presentation shells, before any store call.

use thiserror::Error;

use crate::types::BookFilter;

/// Caller-supplied input had the wrong shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    MissingField { field: &'static str },

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Raw text field values as captured from the form or command line.
#[derive(Debug, Clone, Default)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: String,
    pub isbn: String,
}

/// Fully coerced field values, ready for insert/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub isbn: i64,
}

impl BookInput {
    /// Validate and coerce all four fields for insert/update.
    ///
    /// Title and author must be non-empty; year and isbn must parse as
    /// integers.
    pub fn parse(&self) -> Result<BookFields, ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingField { field: "title" });
        }
        if self.author.is_empty() {
            return Err(ValidationError::MissingField { field: "author" });
        }
        Ok(BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            year: parse_number("year", &self.year)?,
            isbn: parse_number("isbn", &self.isbn)?,
        })
    }

    /// Coerce the fields into a search filter.
    ///
    /// Empty fields stay at their unset sentinel; non-empty year/isbn must
    /// parse as integers.
    pub fn parse_filter(&self) -> Result<BookFilter, ValidationError> {
        let year = match self.year.is_empty() {
            true => None,
            false => Some(parse_number("year", &self.year)?),
        };
        let isbn = match self.isbn.is_empty() {
            true => None,
            false => Some(parse_number("isbn", &self.isbn)?),
        };
        Ok(BookFilter {
            title: self.title.clone(),
            author: self.author.clone(),
            year,
            isbn,
        })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
