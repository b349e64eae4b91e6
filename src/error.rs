use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid topology or training settings. Nothing is built or mutated.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("shape mismatch for {what}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Layer index outside `[0, layers)`, where `layers` counts connections.
    #[error("layer {layer} does not exist (network has {layers} weight layers)")]
    IndexOutOfRange { layer: usize, layers: usize },

    #[error("invalid input: expected a {expected:?} column vector, got {got:?}")]
    InputShape {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("label {label} is not a valid class (network has {classes} outputs)")]
    LabelOutOfRange { label: usize, classes: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
