use std::path;

use anyhow::Context as _;
use folio_config::LogReporter;
use folio_core::BlogPost;
use folio_core::DEFAULT_CONTENT_FILE;

use crate::error::Result;

/// Create a folio project with sample content and templates
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(value_name = "DIRECTORY", default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        folio::create_new_project(&self.directory, &mut LogReporter)
            .with_context(|| "Could not create a new folio project")?;
        log::info!("Created new project at {}", self.directory.display());

        Ok(())
    }
}

/// Add a post to the content file
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct NewArgs {
    /// Title of the post
    #[arg(value_name = "TITLE")]
    pub(crate) title: String,

    /// Author of the post
    #[arg(short, long)]
    pub(crate) author: String,

    /// Body of the post
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub(crate) text: String,

    /// Category to file the post under
    #[arg(long = "category", value_name = "NAME")]
    pub(crate) categories: Vec<String>,

    /// Tag to attach to the post
    #[arg(long = "tag", value_name = "NAME")]
    pub(crate) tags: Vec<String>,

    /// Content file to add the post to
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONTENT_FILE)]
    pub(crate) content: path::PathBuf,
}

impl NewArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let post = BlogPost::new(self.title.as_str(), self.text.as_str(), self.author.as_str())
            .with_categories(self.categories.iter().map(String::as_str))
            .with_tags(self.tags.iter().map(String::as_str));
        folio::create_new_post(&self.content, post, &mut LogReporter)
            .with_context(|| format!("Could not add {:?}", self.title))?;

        Ok(())
    }
}
