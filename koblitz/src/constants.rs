//! SEC 2 domain parameters for the Koblitz curves.
//!
//! Values are big-endian and taken verbatim from SEC 2 version 1.0
//! (<https://www.secg.org/SEC2-Ver-1.0.pdf>), sections 2.4.1 through 2.7.1.

use hex_literal::hex;

/// Raw big-endian domain parameters of one named curve.
pub(crate) struct RawParams {
    pub p: &'static [u8],
    pub n: &'static [u8],
    pub b: &'static [u8],
    pub gx: &'static [u8],
    pub gy: &'static [u8],
    pub bit_size: usize,
}

/// secp160k1, SEC 2 section 2.4.1.
pub(crate) const SECP160K1: RawParams = RawParams {
    p: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFAC73"),
    n: &hex!("0100000000000000000001B8FA16DFAB9ACA16B6B3"),
    b: &hex!("0000000000000000000000000000000000000007"),
    gx: &hex!("3B4C382CE37AA192A4019E763036F4F5DD4D7EBB"),
    gy: &hex!("938CF935318FDCED6BC28286531733C3F03C4FEE"),
    bit_size: 160,
};

/// secp192k1, SEC 2 section 2.5.1.
pub(crate) const SECP192K1: RawParams = RawParams {
    p: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFEE37"),
    n: &hex!("FFFFFFFFFFFFFFFFFFFFFFFE26F2FC170F69466A74DEFD8D"),
    b: &hex!("000000000000000000000000000000000000000000000003"),
    gx: &hex!("DB4FF10EC057E9AE26B07D0280B7F4341DA5D1B1EAE06C7D"),
    gy: &hex!("9B2F2F6D9C5628A7844163D015BE86344082AA88D95E2F9D"),
    bit_size: 192,
};

/// secp224k1, SEC 2 section 2.6.1.
pub(crate) const SECP224K1: RawParams = RawParams {
    p: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFE56D"),
    n: &hex!("010000000000000000000000000001DCE8D2EC6184CAF0A971769FB1F7"),
    b: &hex!("00000000000000000000000000000000000000000000000000000005"),
    gx: &hex!("A1455B334DF099DF30FC28A169A467E9E47075A90F7E650EB6B7A45C"),
    gy: &hex!("7E089FED7FBA344282CAFBD6F7E319F7C0B0BD59E2CA4BDB556D61A5"),
    bit_size: 224,
};

/// secp256k1, SEC 2 section 2.7.1.
pub(crate) const SECP256K1: RawParams = RawParams {
    p: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
    n: &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
    b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
    gx: &hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
    gy: &hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    bit_size: 256,
};

/// Tag byte of a compressed point with an even y-coordinate.
pub const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// Tag byte of a compressed point with an odd y-coordinate.
pub const TAG_COMPRESSED_ODD: u8 = 0x03;

/// Tag byte of an uncompressed point.
pub const TAG_UNCOMPRESSED: u8 = 0x04;
