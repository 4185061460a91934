use std::num::ParseIntError;

use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("book {0} not found")]
    BookNotFound(i32),
}

impl CatalogError {
    fn code(&self) -> &'static str {
        match self {
            CatalogError::BookNotFound(_) => "NOT_FOUND",
        }
    }
}

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT `{value}`")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
