use std::path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read content from `{}`", .path.display())]
    Read {
        path: path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content in `{}` is not a JSON array of records", .path.display())]
    Parse {
        path: path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record lacks a required field or has one of the wrong type.
    #[error("content record {index} in `{}` is malformed", .path.display())]
    Malformed {
        path: path::PathBuf,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("content record {index} in `{}` has an invalid `{field}`", .path.display())]
    Timestamp {
        path: path::PathBuf,
        index: usize,
        field: &'static str,
        #[source]
        source: time::error::Parse,
    },

    #[error("failed to serialize content")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write content to `{}`", .path.display())]
    Write {
        path: path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
