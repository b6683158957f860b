//! SP 800-185 §7 ParallelHash128/256. The "parallel" in the name refers to
//! the two-level tree shape (independent leaf hashes combined by an outer
//! cSHAKE), not to this implementation's execution strategy — each leaf is
//! hashed with a plain one-shot cSHAKE call.

use crate::cshake::{cshake128, cshake256, CShake, CShakeParams};
use crate::encoding::{left_encode, right_encode};
use crate::error::{Sha3Error, Result};

/// The leaf block length (`B`, in bytes) and customization string.
#[derive(Clone, Copy)]
pub struct ParallelHashParams<'a> {
    pub block_len: usize,
    pub customization: &'a [u8],
}

fn leaf_digests(data: &[u8], block_len: usize, leaf_len: usize, v256: bool) -> (Vec<u8>, u64) {
    if data.is_empty() {
        return (Vec::new(), 0);
    }
    let mut out = Vec::new();
    let mut count: u64 = 0;
    for block in data.chunks(block_len) {
        let mut leaf = vec![0u8; leaf_len];
        if v256 {
            cshake256(block, &CShakeParams::default(), &mut leaf);
        } else {
            cshake128(block, &CShakeParams::default(), &mut leaf);
        }
        out.extend_from_slice(&leaf);
        count += 1;
    }
    (out, count)
}

fn one_shot(
    rate: usize,
    leaf_len: usize,
    v256: bool,
    data: &[u8],
    params: &ParallelHashParams,
    trailing: Vec<u8>,
    out: &mut [u8],
) -> Result<()> {
    if params.block_len == 0 {
        return Err(Sha3Error::InvalidParameter("ParallelHash block length must be nonzero"));
    }
    let (leaves, n) = leaf_digests(data, params.block_len, leaf_len, v256);

    let cshake_params =
        CShakeParams { function_name: b"ParallelHash", customization: params.customization };
    let mut outer =
        if v256 { CShake::v256(&cshake_params) } else { CShake::v128(&cshake_params) };

    outer.absorb(&left_encode(params.block_len as u64));
    outer.absorb(&leaves);
    outer.absorb(&right_encode(n));
    outer.absorb(&trailing);
    let _ = rate;
    outer.squeeze(out);
    Ok(())
}

/// One-shot fixed-output `ParallelHash128(X, B, L, S)`.
pub fn parallelhash128(
    data: &[u8],
    params: &ParallelHashParams,
    out: &mut [u8],
) -> Result<()> {
    one_shot(168, 32, false, data, params, right_encode((out.len() as u64) * 8), out)
}

/// One-shot fixed-output `ParallelHash256(X, B, L, S)`.
pub fn parallelhash256(
    data: &[u8],
    params: &ParallelHashParams,
    out: &mut [u8],
) -> Result<()> {
    one_shot(136, 64, true, data, params, right_encode((out.len() as u64) * 8), out)
}

/// One-shot `ParallelHashXOF128(X, B, L, S)`.
pub fn parallelhash128_xof(
    data: &[u8],
    params: &ParallelHashParams,
    out: &mut [u8],
) -> Result<()> {
    one_shot(168, 32, false, data, params, right_encode(0), out)
}

/// One-shot `ParallelHashXOF256(X, B, L, S)`.
pub fn parallelhash256_xof(
    data: &[u8],
    params: &ParallelHashParams,
    out: &mut [u8],
) -> Result<()> {
    one_shot(136, 64, true, data, params, right_encode(0), out)
}
