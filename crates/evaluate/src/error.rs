//! Evaluation error types.

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    /// There are no demand points to assign.
    #[error("no demand points to evaluate")]
    EmptyDemand,

    /// There are no facilities to assign demand points to.
    #[error("no facilities to assign demand points to")]
    NoFacilities,

    /// Ground-truth and predicted label vectors differ in length.
    #[error("{truth} ground-truth labels but {predicted} predictions")]
    LengthMismatch { truth: usize, predicted: usize },

    /// A label does not name one of the facilities.
    #[error("label {label} out of range for {n_classes} facilities")]
    LabelOutOfRange { label: usize, n_classes: usize },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
