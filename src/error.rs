use std::path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] folio_config::Error),

    #[error(transparent)]
    Content(#[from] folio_core::Error),

    #[error("template `{name}` not found in `{}`", .dir.display())]
    TemplateNotFound { name: String, dir: path::PathBuf },

    #[error("failed to compile templates in `{}`", .dir.display())]
    Compile {
        dir: path::PathBuf,
        #[source]
        source: liquid::Error,
    },

    #[error("failed to parse template `{name}`")]
    TemplateParse {
        name: String,
        #[source]
        source: liquid::Error,
    },

    #[error("failed to render template `{name}`")]
    Render {
        name: String,
        #[source]
        source: liquid::Error,
    },

    #[error("`{}` does not exist", .path.display())]
    NotFound { path: path::PathBuf },

    #[error("`{}` already exists", .path.display())]
    Exists { path: path::PathBuf },

    #[error("an entry with slug `{slug}` already exists")]
    DuplicateSlug { slug: String },

    #[error("failed to access `{}`", .path.display())]
    Io {
        path: path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
