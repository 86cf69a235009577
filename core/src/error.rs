use thiserror::Error;

/// Errors raised when the host platform violates the input contract.
///
/// None of these are expected at runtime; each one is fatal to the event that
/// triggered it. The event is dropped whole, with no partial Bridge calls and
/// no change to tracked state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Normalization was attempted before the first resize notification or
    /// after the surface was destroyed.
    #[error("surface extent is not valid")]
    InvalidSurfaceExtent,

    /// A begin arrived for a contact id that is already active.
    #[error("contact {id} is already active")]
    DuplicateContactBegin { id: i32 },

    /// An update or end arrived for a contact id that is not active.
    #[error("contact {id} is not active")]
    UnknownContactReference { id: i32 },

    /// The action index of a batch does not point inside its pointer list.
    #[error("action index {index} outside batch of {len} pointers")]
    MalformedEventBatch { index: usize, len: usize },
}
