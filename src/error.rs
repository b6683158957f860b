//! Error types for this crate (§7).
//!
//! Every fallible operation returns `Result<_, Sha3Error>`; there is no
//! panicking path for well-formed input and no global error state, matching
//! the policy in `SPEC_FULL.md` §4.11/§7.

use thiserror::Error;

/// Errors this crate's sponges and constructions can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Sha3Error {
    /// `absorb` was called on a sponge that has already squeezed output.
    /// The sponge's phase transition (ABSORBING -> SQUEEZING) is one-way
    /// (§3, §4.2).
    #[error("cannot absorb after the sponge has begun squeezing")]
    AlreadySqueezing,

    /// A construction parameter was outside its valid range, e.g. a
    /// TurboSHAKE domain-separation byte outside `0x01..=0x7F`, or a
    /// `ParallelHash` block length of zero.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// A caller-supplied permutation back-end could not be used. This
    /// crate's own `backend::scalar` path never returns this; it is kept
    /// for API stability should a future caller plug in a back-end that
    /// can fail to initialize (§9, Open Question d).
    #[error("unsupported permutation back-end")]
    UnsupportedBackend,
}

pub type Result<T> = core::result::Result<T, Sha3Error>;
