//! Address parsing and program derived addresses.

use curve25519_dalek::edwards::CompressedEdwardsY;
use tracing::{debug, warn};

use crate::{Error, Pubkey};

/// Maximum length of a single derivation seed.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds, the bump seed included.
pub const MAX_SEEDS: usize = 16;

const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// Parse a base58 address.
///
/// Anything that does not decode to exactly 32 bytes is [`Error::InvalidAddress`].
pub fn parse_address(s: &str) -> Result<Pubkey, Error> {
    let mut bytes = [0u8; 32];
    let out: &mut [u8] = &mut bytes;
    match bs58::decode(s).onto(out) {
        Ok(32) => Ok(Pubkey::new_from_array(bytes)),
        _ => Err(Error::InvalidAddress(s.into())),
    }
}

/// Whether `key` is a valid compressed ed25519 point.
pub fn is_on_curve(key: &Pubkey) -> bool {
    bytes_are_curve_point(&key.to_bytes())
}

fn bytes_are_curve_point(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

/// Derive the address for exactly these seeds, without searching for a bump.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<Pubkey, Error> {
    check_seeds(seeds, 0)?;
    let hash = hash_seeds(seeds, &[], program_id);
    if bytes_are_curve_point(&hash) {
        return Err(Error::OnCurve);
    }
    Ok(Pubkey::new_from_array(hash))
}

/// Find a valid program derived address and its corresponding bump seed.
///
/// Bumps are tried from 255 down to 0 and the first off-curve result is returned, so the
/// same seeds always produce the same `(address, bump)` pair.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), Error> {
    search_bumps(seeds, program_id, bytes_are_curve_point)
}

fn search_bumps(
    seeds: &[&[u8]],
    program_id: &Pubkey,
    on_curve: impl Fn(&[u8; 32]) -> bool,
) -> Result<(Pubkey, u8), Error> {
    check_seeds(seeds, 1)?;
    for bump in (0..=u8::MAX).rev() {
        let hash = hash_seeds(seeds, &[bump], program_id);
        if !on_curve(&hash) {
            let address = Pubkey::new_from_array(hash);
            debug!(%program_id, %address, bump, "derived program address");
            return Ok((address, bump));
        }
    }
    warn!(%program_id, "no off-curve program address for seeds");
    Err(Error::DerivationExhausted)
}

fn check_seeds(seeds: &[&[u8]], extra: usize) -> Result<(), Error> {
    if seeds.len() + extra > MAX_SEEDS || seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(Error::MaxSeedLengthExceeded);
    }
    Ok(())
}

fn hash_seeds(seeds: &[&[u8]], bump: &[u8], program_id: &Pubkey) -> [u8; 32] {
    let mut hasher = lhash::Sha256::new();
    for &seed in seeds {
        hasher = hasher.const_update(seed);
    }
    hasher = hasher
        .const_update(bump)
        .const_update(program_id.as_ref())
        .const_update(PDA_MARKER);
    hasher.const_result()
}
