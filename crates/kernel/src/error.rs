//! Catalog error types.
//!
//! Role resolution and menu filtering cannot fail; only building a catalog
//! from external data can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a menu catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML catalog")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid JSON catalog")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog format: {} (expected .yml, .yaml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("menu entry '{label}' has an empty id")]
    EmptyId { label: String },

    #[error("duplicate menu entry id '{0}'")]
    DuplicateId(String),

    #[error("menu entry '{child}' under '{parent}' has children; menus are two levels deep")]
    NestedTooDeep { parent: String, child: String },
}

/// Result type alias using CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
