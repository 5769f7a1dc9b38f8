//! Built-in instruction types, used when the `solana-instruction` feature is off.
//!
//! Field names and constructors mirror `solana_instruction` so the builders compile
//! unchanged against either backend.

use alloc::vec::Vec;

use crate::Pubkey;

/// An account slot of an [`Instruction`].
///
/// Programs read these positionally; the flags tell the runtime whether `pubkey` must sign
/// the transaction and whether the program may write to it.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// One call into `program_id`, owned by the caller once built.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    /// Program-defined encoding; never interpreted by this crate.
    pub data: Vec<u8>,
}

impl AccountMeta {
    /// A slot the program may write to.
    pub fn new(pubkey: Pubkey, is_signer: bool) -> Self {
        Self::with_access(pubkey, is_signer, true)
    }

    /// A slot the program only reads.
    pub fn new_readonly(pubkey: Pubkey, is_signer: bool) -> Self {
        Self::with_access(pubkey, is_signer, false)
    }

    const fn with_access(pubkey: Pubkey, is_signer: bool, is_writable: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable,
        }
    }
}
