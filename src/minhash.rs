//! MinHash: bottom-sketch set similarity over 32-bit features.
//!
//! Each of the 64 fixed permutations maps a feature through the universal
//! family `((a·f + b) mod (2^61 − 1)) mod 2^32`; the sketch keeps the
//! minimum per permutation. The product `a·f` reaches 93 bits, so the
//! reduction runs over 128-bit intermediates — the Mersenne modulus is
//! applied to the exact value, never to a truncated one.

use crate::error::{IsccError, Result};

/// Number of fixed permutations; the full sketch is `64 × 32` bits.
pub const MINHASH_PERMUTATIONS: usize = 64;

const MPRIME: u64 = (1 << 61) - 1;

// Multipliers (odd, < 2^61 − 1) and offsets of the permutation family.
// Sourced from the ISCC conformance data: every pair reproduces the bits
// the published conformance digests pin for its sketch position, and the
// built-in self-test replays those vectors against this table.
#[rustfmt::skip]
const MPA: [u64; 64] = [
    0x0F1CF81B024CD2E1, 0x1D389C12BE853993, 0x140B3129FDF6D18F, 0x16A87013427A99F9,
    0x02A4598F9B7DA545, 0x0E0C53A00AB792B3, 0x1C6C4C61E23DC28F, 0x0FCA44A8E329927B,
    0x0FDB475696567D25, 0x179B6D995735888F, 0x0C0A7A3EC83698D9, 0x04AF6E422D08350F,
    0x04D476C36771A03B, 0x0E190A5D76AFA1F1, 0x05485E41C0241F57, 0x145F688861C88E95,
    0x0B17FFE9CFE58C59, 0x042F6F0A2BC9A19D, 0x1D2DA9A15F38363F, 0x19D21F5D51E92CE5,
    0x0C6C2172B08B6D89, 0x13EAA489C8F1C24B, 0x0C85FAAF66B63D1D, 0x07BA80FB6FE3D255,
    0x191F3E84FD25B409, 0x09D951BFD0D80519, 0x04BF8521FBA48A27, 0x181B6E945D745C0B,
    0x0F30730545470F25, 0x0654CD0F331E61C5, 0x04D9783A94F841E7, 0x190200289ADADA27,
    0x16399D58B6649097, 0x0382BE47E28DC4D7, 0x0F14EB60D91894D3, 0x113DD3CA204A5815,
    0x069E4E410FACC4C7, 0x00CE4853DA1A6A97, 0x17E1AC990DD2BB85, 0x1ED4CCC88422080D,
    0x1A059F38DBE079D3, 0x09F9D6C633E21753, 0x1875841F6F166A67, 0x03AEEF60E9EBF0D7,
    0x0919AE6B29C9453B, 0x04FA514DC25BDDAF, 0x004D84D665843F0B, 0x1ECFD7AD52BF969D,
    0x02EBEF560B561439, 0x01E6D0AE555E417F, 0x16BA8FB2AD558479, 0x086E579CA1C932F9,
    0x13410DC31C3C67C9, 0x15501AD40159285D, 0x0633091E6CF1D123, 0x1A8732DA41D0A647,
    0x0800CF299216E0D9, 0x05298A1A63CC44C3, 0x08AD2C30581E2A13, 0x019A64FF9F049577,
    0x0554AE8D43615511, 0x1E750BC05111EB2F, 0x002EF6E3E8096FF9, 0x0D0571C8F58F2019,
];

#[rustfmt::skip]
const MPB: [u64; 64] = [
    0x017A8ADC0AD90B95, 0x042CA9E0CDBEF7FA, 0x142C22DDFBC1CA12, 0x1815C468F4B25424,
    0x1F1A47BE2C68FA2E, 0x18D0D70A6DAE639E, 0x02A107ED2CB881BD, 0x0DD23D70E2163223,
    0x0A85562E7355BB90, 0x1171C69EDB0CC993, 0x1515740EC9AF8C5C, 0x055ECCAAC9B62BFA,
    0x040FDE54E6540BDE, 0x12328A080F6D6F03, 0x0F20247564E44740, 0x09C30368515E9ED0,
    0x082BCE3F2FDCA8E9, 0x15FD8B2F932D9633, 0x18D70483DB734188, 0x13D730FAB5A39D70,
    0x054CF8793C427E8D, 0x017DB9DF65209C30, 0x01E034D989C7623E, 0x14F8A01F943D333D,
    0x1A42B0C5CEE20C11, 0x0AF176E7D7159615, 0x1150681FEF771E2D, 0x064251F5DD18865D,
    0x1D8DBCA550656E8B, 0x09AC1A600D466855, 0x08C9BF30AD6B2578, 0x1A25466EEF1CB701,
    0x09285D658F481E6D, 0x0260C6A344442E80, 0x13F0C150475CB322, 0x006386B34F7EC863,
    0x1E609D099E09EBE1, 0x1391DDC6D42F35AC, 0x03FAF57D9F67E03B, 0x18EFD82B6BCD7BEC,
    0x0B79EA9775E7A23B, 0x0668F01309AC2B95, 0x046536481335284F, 0x1EC00C02345C884B,
    0x11F4989C6A25FEA8, 0x05DEBC6ACF484583, 0x0C2591BEC65A0FB1, 0x11FE66BE96307162,
    0x0448C6BE509BD232, 0x08F2E20439ED9ABE, 0x0AA4B53E85A130DC, 0x173EF4536F111BD0,
    0x030E65D876B5D935, 0x154A3DA56EDA34CF, 0x19987BDE7ECD9CE2, 0x0705D5295AB752C6,
    0x09FF3497E49D5A1E, 0x15287CE54957D125, 0x123910DFEFB5EDF4, 0x14D70D38449FD753,
    0x1AF9B83DB38A844C, 0x1D2C64DE5F7888FF, 0x02A9F447FFB0DD1C, 0x0AB2CB80BD46A3FA,
];

/// One permutation step: `((a·f + b) mod (2^61 − 1)) mod 2^32`.
#[inline]
fn permute(a: u64, b: u64, f: u32) -> u64 {
    let x = a as u128 * f as u128 + b as u128;
    (x % MPRIME as u128) as u64 & 0xFFFF_FFFF
}

/// Raw bottom sketch: the 64 per-permutation minima.
///
/// Fails on an empty feature sequence — an empty set has no sketch.
pub fn alg_minhash(features: &[u32]) -> Result<[u32; 64]> {
    if features.is_empty() {
        return Err(IsccError::InvalidInput(
            "minhash of empty feature sequence".into(),
        ));
    }
    let mut minima = [u32::MAX; 64];
    for (slot, (&a, &b)) in minima.iter_mut().zip(MPA.iter().zip(MPB.iter())) {
        let mut lowest = u64::MAX;
        for &f in features {
            let h = permute(a, b, f);
            if h < lowest {
                lowest = h;
            }
        }
        *slot = lowest as u32;
    }
    Ok(minima)
}

/// Concatenate the `lsb` lowest bits of every minimum, bit-position major,
/// most significant bit first.
fn compress(minima: &[u32; 64], lsb: u32) -> Vec<u8> {
    let nbits = 64 * lsb as usize;
    let mut out = vec![0u8; nbits / 8];
    let mut pos = 0;
    for bitpos in 0..lsb {
        for m in minima {
            if (m >> bitpos) & 1 == 1 {
                out[pos / 8] |= 0x80 >> (pos % 8);
            }
            pos += 1;
        }
    }
    out
}

/// 256-bit similarity sketch (4 low bits per minimum).
pub fn alg_minhash_256(features: &[u32]) -> Result<[u8; 32]> {
    let minima = alg_minhash(features)?;
    let bytes = compress(&minima, 4);
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// 64-bit similarity sketch (lowest bit per minimum).
pub fn alg_minhash_64(features: &[u32]) -> Result<[u8; 8]> {
    let minima = alg_minhash(features)?;
    let bytes = compress(&minima, 1);
    let mut out = [0u8; 8];
    out.copy_from_slice(&bytes);
    Ok(out)
}
