//! SP 800-185 §4 KMAC128/256, in both fixed-output and XOF form.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::cshake::{CShake, CShakeParams};
use crate::encoding::{bytepad, encode_string, right_encode};

/// The key and customization string for a KMAC instance. `key` is zeroized
/// from any intermediate buffer as soon as it has been absorbed.
#[derive(Clone, Copy, Default)]
pub struct KmacParams<'a> {
    pub key: &'a [u8],
    pub customization: &'a [u8],
}

fn new_cshake(rate: usize, params: &KmacParams, v256: bool) -> CShake {
    let cshake_params = CShakeParams { function_name: b"KMAC", customization: params.customization };
    let mut cshake = if v256 { CShake::v256(&cshake_params) } else { CShake::v128(&cshake_params) };

    let mut prefix = encode_string(params.key);
    let mut padded = bytepad(&prefix, rate);
    cshake.absorb(&padded);
    prefix.zeroize();
    padded.zeroize();

    cshake
}

/// An incremental KMAC128/256 instance. Call [`Kmac::finish`] for the
/// fixed-output form or [`Kmac::finish_xof`] for the XOF form; the two
/// differ only in the trailing `right_encode` (§4.5).
pub struct Kmac(CShake);

impl Kmac {
    pub fn v128(params: &KmacParams) -> Self {
        Kmac(new_cshake(168, params, false))
    }

    pub fn v256(params: &KmacParams) -> Self {
        Kmac(new_cshake(136, params, true))
    }

    pub fn absorb(&mut self, data: &[u8]) -> &mut Self {
        self.0.absorb(data);
        self
    }

    /// Finalizes as a fixed-output MAC of `out.len()` bytes.
    pub fn finish(&mut self, out: &mut [u8]) {
        self.0.absorb(&right_encode((out.len() as u64) * 8));
        self.0.squeeze(out);
    }

    /// Finalizes as an extendable-output MAC (`right_encode(0)`).
    pub fn finish_xof(&mut self, out: &mut [u8]) {
        self.0.absorb(&right_encode(0));
        self.0.squeeze(out);
    }
}

/// One-shot fixed-output `KMAC128(K, X, L, S)`.
pub fn kmac128(params: &KmacParams, data: &[u8], out: &mut [u8]) {
    Kmac::v128(params).absorb(data).finish(out);
}

/// One-shot fixed-output `KMAC256(K, X, L, S)`.
pub fn kmac256(params: &KmacParams, data: &[u8], out: &mut [u8]) {
    Kmac::v256(params).absorb(data).finish(out);
}

/// One-shot `KMACXOF128(K, X, L, S)`.
pub fn kmac128_xof(params: &KmacParams, data: &[u8], out: &mut [u8]) {
    Kmac::v128(params).absorb(data).finish_xof(out);
}

/// One-shot `KMACXOF256(K, X, L, S)`.
pub fn kmac256_xof(params: &KmacParams, data: &[u8], out: &mut [u8]) {
    Kmac::v256(params).absorb(data).finish_xof(out);
}

/// Constant-time comparison of a computed tag against one supplied by a
/// peer, so that MAC verification doesn't leak timing information about
/// where the first differing byte is.
pub fn verify(expected: &[u8], candidate: &[u8]) -> bool {
    expected.ct_eq(candidate).into()
}
