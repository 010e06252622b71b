use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("price walk left the finite range in {period}, day {day}")]
    Diverged { period: String, day: u32 },
}

impl SeriesError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SeriesError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
