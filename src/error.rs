use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxcanvas operations
#[derive(Error, Diagnostic, Debug)]
pub enum CanvasError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxcanvas::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxcanvas::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxcanvas::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Dimension error: {message}")]
    #[diagnostic(code(pxcanvas::dimension))]
    Dimension {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Layer error: {message}")]
    #[diagnostic(code(pxcanvas::layer))]
    Layer {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CanvasError>;
