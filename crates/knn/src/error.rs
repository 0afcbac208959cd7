//! Error types for the siting-knn crate.

/// Error type for all fallible operations in the siting-knn crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnnError {
    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when there are too few points to leave one out.
    #[error("leave-one-out needs at least 2 points, got {n}")]
    InsufficientPoints {
        /// Number of points supplied.
        n: usize,
    },

    /// Returned when the points and labels slices differ in length.
    #[error("{points} points but {labels} labels")]
    LengthMismatch {
        /// Length of the points slice.
        points: usize,
        /// Length of the labels slice.
        labels: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_k() {
        let e = KnnError::InvalidK { k: 0 };
        assert_eq!(e.to_string(), "k must be >= 1, got 0");
    }

    #[test]
    fn error_insufficient_points() {
        let e = KnnError::InsufficientPoints { n: 1 };
        assert_eq!(e.to_string(), "leave-one-out needs at least 2 points, got 1");
    }

    #[test]
    fn error_length_mismatch() {
        let e = KnnError::LengthMismatch {
            points: 4,
            labels: 3,
        };
        assert_eq!(e.to_string(), "4 points but 3 labels");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
