//! Keccak-_p_[1600, n_r] permutation back-ends (§4.1).
//!
//! [`scalar`] is the authoritative implementation every sponge uses.

pub mod scalar;
