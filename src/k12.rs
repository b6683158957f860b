//! KangarooTwelve: a tree hash built from TurboSHAKE128/256 leaf and trunk
//! sponges (draft-irtf-cfrg-kangarootwelve). Messages up to one 8192-byte
//! block hash directly; larger messages split into 8192-byte leaves whose
//! chaining values are absorbed by a trunk sponge (§4.8).
//!
//! The domain-separation bytes below (`0x07` single-leaf, `0x0B` leaf
//! chaining value, `0x06` trunk) are the `D` parameter TurboSHAKE's `pad()`
//! applies at the start of padding (§3/§4.2) — never bytes appended to the
//! absorbed message.

use crate::encoding::right_encode;
use crate::error::Result;
use crate::turboshake::{turboshake128, turboshake256, TurboShake};

const BLOCK_SIZE: usize = 8192;
const SINGLE_LEAF_DSB: u8 = 0x07;
const LEAF_CV_DSB: u8 = 0x0b;
const TRUNK_DSB: u8 = 0x06;
const NODE_MARKER: [u8; 8] = [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
const TRAILER: [u8; 2] = [0xff, 0xff];

fn leaf_cv(chunk: &[u8], cv_len: usize, v256: bool) -> Result<Vec<u8>> {
    let mut cv = vec![0u8; cv_len];
    if v256 {
        turboshake256(chunk, LEAF_CV_DSB, &mut cv)?;
    } else {
        turboshake128(chunk, LEAF_CV_DSB, &mut cv)?;
    }
    Ok(cv)
}

fn kangarootwelve(
    message: &[u8],
    customization: &[u8],
    cv_len: usize,
    v256: bool,
    out: &mut [u8],
) -> Result<()> {
    let mut s = Vec::with_capacity(message.len() + customization.len() + 9);
    s.extend_from_slice(message);
    s.extend_from_slice(customization);
    s.extend_from_slice(&right_encode(customization.len() as u64));

    if s.len() <= BLOCK_SIZE {
        return if v256 {
            turboshake256(&s, SINGLE_LEAF_DSB, out)
        } else {
            turboshake128(&s, SINGLE_LEAF_DSB, out)
        };
    }

    let (head, rest) = s.split_at(BLOCK_SIZE);
    let mut trunk =
        if v256 { TurboShake::v256(TRUNK_DSB)? } else { TurboShake::v128(TRUNK_DSB)? };
    trunk.absorb(head)?;
    trunk.absorb(&NODE_MARKER)?;

    let mut leaf_count: u64 = 0;
    for chunk in rest.chunks(BLOCK_SIZE) {
        trunk.absorb(&leaf_cv(chunk, cv_len, v256)?)?;
        leaf_count += 1;
    }
    trunk.absorb(&right_encode(leaf_count))?;
    trunk.absorb(&TRAILER)?;
    trunk.squeeze(out);
    Ok(())
}

/// One-shot `KT128(M, C, L)`.
pub fn kt128(message: &[u8], customization: &[u8], out: &mut [u8]) -> Result<()> {
    kangarootwelve(message, customization, 32, false, out)
}

/// One-shot `KT256(M, C, L)`.
pub fn kt256(message: &[u8], customization: &[u8], out: &mut [u8]) -> Result<()> {
    kangarootwelve(message, customization, 64, true, out)
}
