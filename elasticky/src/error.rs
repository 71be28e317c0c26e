use alloc::string::String;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The widget name would produce class tokens containing whitespace.
    #[error("invalid widget name {0:?}: class names must not contain whitespace")]
    InvalidName(String),
}
