use std::path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The candidate configuration names a key the current configuration does not know.
    #[error("unrecognized configuration key `{key}`")]
    UnknownKey { key: String },

    #[error("failed to write config to `{}`", .path.display())]
    Write {
        path: path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[from] serde_json::Error),
}
