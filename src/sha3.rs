//! FIPS-202 SHA3-224/256/384/512 and SHAKE128/256 (§4.4).

use crate::sponge::Sponge;

const SHA3_DSB: u8 = 0x06;
const SHAKE_DSB: u8 = 0x1f;

fn digest(rate: usize, dsb: u8, data: &[u8], out: &mut [u8]) {
    let mut sponge = Sponge::new(rate, dsb);
    sponge.absorb(data).expect("fresh sponge never squeezes before absorbing");
    sponge.squeeze(out);
}

macro_rules! fixed_output_fn {
    ($name:ident, $rate:expr, $len:expr) => {
        #[doc = concat!("One-shot SHA3-", stringify!($len), " over `data`.")]
        pub fn $name(data: &[u8]) -> [u8; $len / 8] {
            let mut out = [0u8; $len / 8];
            digest($rate, SHA3_DSB, data, &mut out);
            out
        }
    };
}

fixed_output_fn!(sha3_224, 144, 224);
fixed_output_fn!(sha3_256, 136, 256);
fixed_output_fn!(sha3_384, 104, 384);
fixed_output_fn!(sha3_512, 72, 512);

/// An incremental SHAKE128/256 extendable-output function.
pub struct Shake(Sponge);

impl Shake {
    pub fn v128() -> Self {
        Shake(Sponge::new(168, SHAKE_DSB))
    }

    pub fn v256() -> Self {
        Shake(Sponge::new(136, SHAKE_DSB))
    }

    pub fn absorb(&mut self, data: &[u8]) -> &mut Self {
        self.0.absorb(data).expect("absorb after squeeze is a caller bug for this API");
        self
    }

    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.0.squeeze(out)
    }

    #[cfg(feature = "std")]
    pub fn squeeze_vec(&mut self, n: usize) -> Vec<u8> {
        self.0.squeeze_vec(n)
    }
}

/// One-shot `SHAKE128(data, L)`.
pub fn shake128(data: &[u8], out: &mut [u8]) {
    Shake::v128().absorb(data).squeeze(out);
}

/// One-shot `SHAKE256(data, L)`.
pub fn shake256(data: &[u8], out: &mut [u8]) {
    Shake::v256().absorb(data).squeeze(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_256_empty_message() {
        assert_eq!(
            sha3_256(b""),
            [
                0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
                0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
                0x80, 0xf8, 0x43, 0x4a,
            ]
        );
    }

    #[test]
    fn sha3_256_abc() {
        assert_eq!(
            sha3_256(b"abc"),
            [
                0x3a, 0x98, 0x5d, 0xa7, 0x4f, 0xe2, 0x25, 0xb2, 0x04, 0x5c, 0x17, 0x2d, 0x6b, 0xd3,
                0x90, 0xbd, 0x85, 0x5f, 0x08, 0x6e, 0x3e, 0x9d, 0x52, 0x5b, 0x46, 0xbf, 0xe2, 0x45,
                0x11, 0x43, 0x15, 0x32,
            ]
        );
    }

    #[test]
    fn sha3_512_empty_message() {
        assert_eq!(
            sha3_512(b""),
            [
                0xa6, 0x9f, 0x73, 0xcc, 0xa2, 0x3a, 0x9a, 0xc5, 0xc8, 0xb5, 0x67, 0xdc, 0x18, 0x5a,
                0x75, 0x6e, 0x97, 0xc9, 0x82, 0x16, 0x4f, 0xe2, 0x58, 0x59, 0xe0, 0xd1, 0xdc, 0xc1,
                0x47, 0x5c, 0x80, 0xa6, 0x15, 0xb2, 0x12, 0x3a, 0xf1, 0xf5, 0xf9, 0x4c, 0x11, 0xe3,
                0xe9, 0x40, 0x2c, 0x3a, 0xc5, 0x58, 0xf5, 0x00, 0x19, 0x9d, 0x95, 0xb6, 0xd3, 0xe3,
                0x01, 0x75, 0x85, 0x86, 0x28, 0x1d, 0xcd, 0x26,
            ]
        );
    }

    #[test]
    fn shake128_empty_message_32_bytes() {
        let mut out = [0u8; 32];
        shake128(b"", &mut out);
        assert_eq!(
            out,
            [
                0x7f, 0x9c, 0x2b, 0xa4, 0xe8, 0x8f, 0x82, 0x7d, 0x61, 0x60, 0x45, 0x50, 0x76, 0x05,
                0x85, 0x3e, 0xd7, 0x3b, 0x80, 0x93, 0xf6, 0xef, 0xbc, 0x88, 0xeb, 0x1a, 0x6e, 0xac,
                0xfa, 0x66, 0xef, 0x26,
            ]
        );
    }

    #[test]
    fn shake256_empty_message_32_bytes() {
        let mut out = [0u8; 32];
        shake256(b"", &mut out);
        assert_eq!(
            out,
            [
                0x46, 0xb9, 0xdd, 0x2b, 0x0b, 0xa8, 0x8d, 0x13, 0x23, 0x3b, 0x3f, 0xeb, 0x74, 0x3e,
                0xeb, 0x24, 0x3f, 0xcd, 0x52, 0xea, 0x62, 0xb8, 0x1b, 0x82, 0xb5, 0x0c, 0x27, 0x64,
                0x6e, 0xd5, 0x76, 0x2f,
            ]
        );
    }

    #[test]
    fn shake_streams_same_as_one_shot() {
        let mut one_shot = [0u8; 64];
        shake128(b"streaming test", &mut one_shot);

        let mut shake = Shake::v128();
        shake.absorb(b"streaming test");
        let mut first = [0u8; 20];
        let mut second = [0u8; 44];
        shake.squeeze(&mut first);
        shake.squeeze(&mut second);

        assert_eq!(&one_shot[..20], &first[..]);
        assert_eq!(&one_shot[20..], &second[..]);
    }
}
