//! Static site generator: JSON content rendered through liquid templates.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use std::path;

pub use crate::engine::*;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::new::create_new_post;
pub use crate::new::create_new_project;
pub use crate::resolver::Resolver;
pub use crate::site::SiteBuilder;
pub use crate::storage::FileSystemStorage;
pub use crate::storage::Storage;
pub use crate::template::*;

pub mod error;

mod engine;
mod new;
mod resolver;
mod site;
mod storage;
mod template;

/// Build the site described by `config` from the content at `content_source`.
///
/// Returns the number of pages written.
pub fn build(
    config: &folio_config::ConfigStore,
    content_source: &path::Path,
    reporter: &mut dyn folio_config::Reporter,
) -> Result<usize> {
    let settings = config.config();
    let mut content = folio_core::ContentRepository::new();
    let mut templates = Templates::new(settings.template_dir());
    let resolver = Resolver::new(settings.base_url.clone());
    let storage = FileSystemStorage::new(settings.output_dir())?;

    let mut engine = SiteEngine::new(
        config,
        &mut content,
        content_source,
        &mut templates,
        &resolver,
        &storage,
    );
    engine.run(reporter)
}
