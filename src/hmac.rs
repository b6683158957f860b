//! HMAC over the fixed-output SHA3 functions (RFC 2104), added as an
//! ambient supplement: SHA3 was designed to be keyable directly via KMAC,
//! but RFC 2104-style HMAC-SHA3-d is still widely deployed (TLS 1.3
//! cipher suites, JOSE) and costs little to carry alongside KMAC (§4.9).

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::sha3::{sha3_224, sha3_256, sha3_384, sha3_512};

/// `block_size` in bytes, i.e. the SHA3-d rate, per RFC 2104 §2 applied to
/// SHA3: 144 for SHA3-224, 136 for SHA3-256, 104 for SHA3-384, 72 for
/// SHA3-512.
trait FixedHash {
    const BLOCK_SIZE: usize;
    const OUTPUT_SIZE: usize;
    fn hash(data: &[u8], out: &mut [u8]);
}

macro_rules! fixed_hash_impl {
    ($marker:ident, $f:ident, $block:expr, $out:expr) => {
        struct $marker;
        impl FixedHash for $marker {
            const BLOCK_SIZE: usize = $block;
            const OUTPUT_SIZE: usize = $out;
            fn hash(data: &[u8], out: &mut [u8]) {
                out.copy_from_slice(&$f(data));
            }
        }
    };
}

fixed_hash_impl!(Sha3_224Marker, sha3_224, 144, 28);
fixed_hash_impl!(Sha3_256Marker, sha3_256, 136, 32);
fixed_hash_impl!(Sha3_384Marker, sha3_384, 104, 48);
fixed_hash_impl!(Sha3_512Marker, sha3_512, 72, 64);

fn hmac<H: FixedHash>(key: &[u8], message: &[u8], out: &mut [u8]) {
    let mut block_key = vec![0u8; H::BLOCK_SIZE];
    if key.len() > H::BLOCK_SIZE {
        let mut digest = vec![0u8; H::OUTPUT_SIZE];
        H::hash(key, &mut digest);
        block_key[..H::OUTPUT_SIZE].copy_from_slice(&digest);
        digest.zeroize();
    } else {
        block_key[..key.len()].copy_from_slice(key);
    }

    let mut ipad: Vec<u8> = block_key.iter().map(|&b| b ^ 0x36).collect();
    let mut opad: Vec<u8> = block_key.iter().map(|&b| b ^ 0x5c).collect();
    block_key.zeroize();

    ipad.extend_from_slice(message);
    let mut inner = vec![0u8; H::OUTPUT_SIZE];
    H::hash(&ipad, &mut inner);
    ipad.zeroize();

    opad.extend_from_slice(&inner);
    inner.zeroize();
    H::hash(&opad, out);
    opad.zeroize();
}

/// `HMAC-SHA3-224(K, text)`.
pub fn hmac_sha3_224(key: &[u8], message: &[u8]) -> [u8; 28] {
    let mut out = [0u8; 28];
    hmac::<Sha3_224Marker>(key, message, &mut out);
    out
}

/// `HMAC-SHA3-256(K, text)`.
pub fn hmac_sha3_256(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    hmac::<Sha3_256Marker>(key, message, &mut out);
    out
}

/// `HMAC-SHA3-384(K, text)`.
pub fn hmac_sha3_384(key: &[u8], message: &[u8]) -> [u8; 48] {
    let mut out = [0u8; 48];
    hmac::<Sha3_384Marker>(key, message, &mut out);
    out
}

/// `HMAC-SHA3-512(K, text)`.
pub fn hmac_sha3_512(key: &[u8], message: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    hmac::<Sha3_512Marker>(key, message, &mut out);
    out
}

/// Constant-time comparison of a computed HMAC against one supplied by a
/// peer.
pub fn verify(expected: &[u8], candidate: &[u8]) -> bool {
    expected.ct_eq(candidate).into()
}
