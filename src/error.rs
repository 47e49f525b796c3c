use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Raised when a record carries no usable name data: the raw feed string
    /// is blank and the explicit given/family fields are incomplete. Callers
    /// are expected to substitute a fallback label rather than fail the
    /// surrounding request; see
    /// [`display_name_or_unknown`](crate::normalizer::display_name_or_unknown).
    #[error("no usable name data: raw name is blank and given/family fields are incomplete")]
    MissingName,
}
