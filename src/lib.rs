#![cfg_attr(not(feature = "std"), no_std)]
//! The FIPS-202 SHA-3 family and its SP 800-185 derived functions:
//! SHA3-224/256/384/512, SHAKE128/256, cSHAKE128/256, KMAC128/256,
//! TupleHash128/256, ParallelHash128/256, plus TurboSHAKE128/256 and
//! KangarooTwelve from draft-irtf-cfrg-kangarootwelve, and HMAC-SHA3.
//!
//! Every construction is built on one [`sponge::Sponge`] engine around the
//! [`backend`] permutation.

pub mod backend;
pub mod cshake;
pub mod encoding;
pub mod error;
pub mod hex;
pub mod hmac;
pub mod k12;
pub mod kmac;
pub mod parallelhash;
pub mod sha3;
pub mod sponge;
pub mod tuplehash;
pub mod turboshake;

pub use error::{Result, Sha3Error};

pub use cshake::{cshake128, cshake256, CShake, CShakeParams};
pub use hmac::{hmac_sha3_224, hmac_sha3_256, hmac_sha3_384, hmac_sha3_512};
pub use k12::{kt128, kt256};
pub use kmac::{kmac128, kmac128_xof, kmac256, kmac256_xof, Kmac, KmacParams};
pub use parallelhash::{
    parallelhash128, parallelhash128_xof, parallelhash256, parallelhash256_xof, ParallelHashParams,
};
pub use sha3::{sha3_224, sha3_256, sha3_384, sha3_512, shake128, shake256, Shake};
pub use tuplehash::{tuplehash128, tuplehash256, TupleHash, TupleHashParams};
pub use turboshake::{turboshake128, turboshake256, TurboShake};
