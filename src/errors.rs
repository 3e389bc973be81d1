use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while turning an airfoil description into a boundary file.
#[derive(Debug, Error)]
pub enum AirfoilError {
    /// The description file does not exist.
    #[error("{} not found", .path.display())]
    MissingInput { path: PathBuf },

    /// The first line of the description holds no 4-digit NACA code.
    #[error("expected a NACA 4-digit code in the first line, found {header:?}")]
    Format { header: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Rejections of an interactively entered point count. These never leave the prompt loop; the
/// message is shown to the user before asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointCountError {
    #[error("Enter an integer value, e.g. 120.")]
    NotInteger(String),

    #[error("Please enter at least {minimum} to keep the curve smooth.")]
    BelowMinimum { value: i64, minimum: usize },
}
