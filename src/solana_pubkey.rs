use borsh::{BorshDeserialize, BorshSerialize};
use core::{fmt, str::FromStr};

use crate::Error;

/// Convenience macro to define a static public key.
///
/// Input: a single literal base58 string representation of a Pubkey.
#[macro_export]
macro_rules! pubkey {
    ($input:literal) => {
        $crate::Pubkey::from_str_const($input)
    };
}

#[doc(hidden)]
pub mod pubkey {}

/// Maximum string length of a base58 encoded pubkey
const MAX_BASE58_LEN: usize = 44;

/// Number of bytes in a pubkey
const PUBKEY_BYTES: usize = 32;

fn write_as_base58(f: &mut fmt::Formatter, p: &Pubkey) -> fmt::Result {
    let mut out = [0u8; MAX_BASE58_LEN];
    let out_slice: &mut [u8] = &mut out;

    // 32 bytes never encode to more than 44 characters, so the buffer is always large enough.
    let len = bs58::encode(p.0).onto(out_slice).map_err(|_| fmt::Error)?;
    let as_str = core::str::from_utf8(&out[..len]).map_err(|_| fmt::Error)?;

    f.write_str(as_str)
}

/// The address of an account on chain.
///
/// Wallet addresses are ed25519 public keys. Program derived addresses are deliberately
/// off the curve and have no secret key at all; see [`crate::find_program_address`].
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(
    Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd, BorshDeserialize, BorshSerialize,
)]
pub struct Pubkey([u8; PUBKEY_BYTES]);

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_as_base58(f, self)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_as_base58(f, self)
    }
}

impl Pubkey {
    pub const fn new_from_array(pubkey_array: [u8; 32]) -> Self {
        Self(pubkey_array)
    }

    /// Decode a string into a Pubkey, usable in a const context
    pub const fn from_str_const(s: &str) -> Self {
        let id_array = five8_const::decode_32_const(s);
        Pubkey::new_from_array(id_array)
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Return a reference to the `Pubkey`'s byte array.
    #[inline(always)]
    pub const fn as_array(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for Pubkey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_address(s)
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl AsMut<[u8]> for Pubkey {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0[..]
    }
}

impl From<[u8; 32]> for Pubkey {
    #[inline]
    fn from(from: [u8; 32]) -> Self {
        Self(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_matches_const_decode() {
        let key = pubkey!("SysvarRent111111111111111111111111111111111");
        assert_eq!(key.to_string(), "SysvarRent111111111111111111111111111111111");
        assert_eq!(Pubkey::default().to_string(), "11111111111111111111111111111111");
    }

    #[test]
    fn test_from_str() {
        let key: Pubkey = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL".parse().unwrap();
        assert_eq!(key, pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"));
        assert!("not base58!".parse::<Pubkey>().is_err());
    }
}
