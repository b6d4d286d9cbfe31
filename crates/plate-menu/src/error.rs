use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid menu file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Core(#[from] plate_core::CoreError),

    #[error("item '{item}' refers to unknown restaurant '{restaurant}'")]
    UnknownRestaurant { item: String, restaurant: String },

    #[error("duplicate restaurant id '{0}'")]
    DuplicateRestaurant(String),

    #[error("duplicate item id '{item}' at restaurant '{restaurant}'")]
    DuplicateItem { restaurant: String, item: String },
}
