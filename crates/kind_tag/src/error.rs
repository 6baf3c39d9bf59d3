//! Tag domain errors.

/// Misuse of the tag combinators.
///
/// These are programmer errors: the classifier only ever passes single,
/// well-defined flags.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TagError {
    /// A containment test was asked about the empty flag.
    #[error("flag cannot be zero")]
    ZeroFlag,
    /// The argument carries bits outside the defined categories.
    #[error("{bits:#x} is not a valid flag value")]
    InvalidFlag { bits: u32 },
    /// The receiver itself carries bits outside the defined categories.
    #[error("tag {bits:#x} is damaged: it carries undefined bits")]
    Damaged { bits: u32 },
}
