//! unitconv core - Fundamental types
//!
//! This crate provides the types shared by the unit table and its callers:
//! - `Category`: the closed set of physical quantity domains
//! - `LookupError`: the single error kind of the conversion engine

mod category;
mod error;

pub use category::Category;
pub use error::{LookupError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Category, LookupError};
    pub use crate::error::codes;
}
