use thiserror::Error;

/// Failures reported by the checked operations in this crate.
///
/// These are usually surfaced wrapped in an [`anyhow::Error`]; use
/// [`anyhow::Error::downcast_ref`] to match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericsError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl NumericsError {
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> anyhow::Error {
        Self::IndexOutOfRange { index, len }.into()
    }
}
