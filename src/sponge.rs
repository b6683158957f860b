//! The sponge state machine shared by every construction in this crate:
//! absorb → pad → squeeze, parameterised by rate, domain-separation byte,
//! and round count (§3, §4.2).

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use crate::backend::scalar;
use crate::error::{Sha3Error, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Absorbing,
    Squeezing,
}

/// A Keccak-_p_[1600, n_r] sponge: rate/capacity-parameterised absorb/pad/
/// squeeze over a 1600-bit state.
///
/// `pos` always satisfies `pos < rate` between operations; `phase`
/// transitions ABSORBING -> SQUEEZING exactly once, on the first call to
/// [`Sponge::squeeze`] (§3 invariants).
#[derive(Clone)]
pub struct Sponge {
    state: [u8; 200],
    rate: usize,
    dsb: u8,
    rounds: usize,
    pos: usize,
    phase: Phase,
}

impl Sponge {
    /// A new sponge with the full 24-round Keccak-f[1600] permutation, the
    /// permutation used by every FIPS-202 and SP 800-185 construction.
    pub fn new(rate: usize, dsb: u8) -> Self {
        Self::with_rounds(rate, dsb, scalar::MAX_ROUNDS)
    }

    /// A new sponge with a custom round count, used by TurboSHAKE and K12
    /// (`rounds = 12`).
    pub fn with_rounds(rate: usize, dsb: u8, rounds: usize) -> Self {
        debug_assert!(rate > 0 && rate < 200, "rate must be in (0, 200)");
        debug_assert!(rounds % 2 == 0 && rounds <= scalar::MAX_ROUNDS);
        Sponge { state: [0u8; 200], rate, dsb, rounds, pos: 0, phase: Phase::Absorbing }
    }

    #[inline]
    fn permute(&mut self) {
        let mut lanes = [0u64; 25];
        LittleEndian::read_u64_into(&self.state, &mut lanes);
        scalar::permute(&mut lanes, self.rounds);
        LittleEndian::write_u64_into(&lanes, &mut self.state);
    }

    /// Absorbs `data`, XOR-accumulating bytes into the rate portion of the
    /// state and permuting every time the rate boundary is crossed. Never
    /// buffers into an auxiliary heap buffer (§9 "Streaming absorb/squeeze
    /// contract").
    pub fn absorb(&mut self, data: &[u8]) -> Result<()> {
        if self.phase == Phase::Squeezing {
            return Err(Sha3Error::AlreadySqueezing);
        }
        for &byte in data {
            self.state[self.pos] ^= byte;
            self.pos += 1;
            if self.pos == self.rate {
                self.permute();
                self.pos = 0;
            }
        }
        Ok(())
    }

    /// `pad10*1` with the construction-specific domain byte at the start:
    /// `S[pos] ^= dsb`, `S[rate-1] ^= 0x80`, then one permutation.
    fn pad(&mut self) {
        self.state[self.pos] ^= self.dsb;
        self.state[self.rate - 1] ^= 0x80;
        self.permute();
        self.pos = 0;
        self.phase = Phase::Squeezing;
    }

    /// Fills `dst` with squeezed output. Pads and transitions to SQUEEZING
    /// on the first call; idempotent-by-concatenation thereafter (§4.9,
    /// §8 invariant 3).
    pub fn squeeze(&mut self, dst: &mut [u8]) {
        if self.phase == Phase::Absorbing {
            self.pad();
        }
        for byte in dst.iter_mut() {
            if self.pos == self.rate {
                self.permute();
                self.pos = 0;
            }
            *byte = self.state[self.pos];
            self.pos += 1;
        }
    }

    /// Returns `n` bytes of squeezed output.
    #[cfg(feature = "std")]
    pub fn squeeze_vec(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.squeeze(&mut out);
        out
    }

    /// True once the sponge has transitioned to SQUEEZING.
    pub fn is_squeezing(&self) -> bool {
        self.phase == Phase::Squeezing
    }

    pub fn rate(&self) -> usize {
        self.rate
    }
}

impl Zeroize for Sponge {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.pos.zeroize();
    }
}
