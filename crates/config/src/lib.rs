//! Configuration for the folio static site generator.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod config;
mod diagnostic;
mod error;
mod store;

pub use self::config::*;
pub use self::diagnostic::*;
pub use self::error::*;
pub use self::store::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;
