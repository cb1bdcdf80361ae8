use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A child is keyed under an element that does not lead its own prefix,
    /// or its prefix is empty.
    #[error("invalid node")]
    InvalidNode,
}

pub type Result<T> = std::result::Result<T, Error>;
