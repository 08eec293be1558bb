//! Content model for the folio static site generator.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod entry;
mod error;
mod item;
mod record;
mod repository;

pub mod slug;

pub use self::entry::*;
pub use self::error::*;
pub use self::item::*;
pub use self::repository::*;

pub use folio_config::Reporter;
pub use folio_config::Warning;

pub type Result<T, E = Error> = std::result::Result<T, E>;
