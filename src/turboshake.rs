//! TurboSHAKE128/256: the 12-round, configurable-domain-separation XOF from
//! draft-irtf-cfrg-kangarootwelve, used directly by K12's leaf and trunk
//! sponges (§4.7).

use crate::error::{Sha3Error, Result};
use crate::sponge::Sponge;

const ROUNDS: usize = 12;
pub const DEFAULT_DSB: u8 = 0x1f;

fn check_dsb(dsb: u8) -> Result<()> {
    if (0x01..=0x7f).contains(&dsb) {
        Ok(())
    } else {
        Err(Sha3Error::InvalidParameter("TurboSHAKE domain-separation byte must be in 0x01..=0x7f"))
    }
}

/// An incremental TurboSHAKE128/256 instance.
pub struct TurboShake(Sponge);

impl TurboShake {
    pub fn v128(dsb: u8) -> Result<Self> {
        check_dsb(dsb)?;
        Ok(TurboShake(Sponge::with_rounds(168, dsb, ROUNDS)))
    }

    pub fn v256(dsb: u8) -> Result<Self> {
        check_dsb(dsb)?;
        Ok(TurboShake(Sponge::with_rounds(136, dsb, ROUNDS)))
    }

    pub fn absorb(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.0.absorb(data)?;
        Ok(self)
    }

    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.0.squeeze(out)
    }
}

/// One-shot `TurboSHAKE128(data, D, L)`.
pub fn turboshake128(data: &[u8], dsb: u8, out: &mut [u8]) -> Result<()> {
    TurboShake::v128(dsb)?.absorb(data)?.squeeze(out);
    Ok(())
}

/// One-shot `TurboSHAKE256(data, D, L)`.
pub fn turboshake256(data: &[u8], dsb: u8, out: &mut [u8]) -> Result<()> {
    TurboShake::v256(dsb)?.absorb(data)?.squeeze(out);
    Ok(())
}
