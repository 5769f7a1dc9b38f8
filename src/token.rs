//! SPL token program encoding.

use alloc::vec::Vec;
use borsh::{BorshDeserialize, BorshSerialize};
use tracing::trace;

use crate::{AccountMeta, Instruction, Pubkey};

/// Arguments of the token program's `Transfer` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Transfer {
    pub amount: u64,
}

impl Transfer {
    pub const DISCRIMINATOR: &[u8] = &[3];

    /// Discriminator followed by the little-endian amount, the borsh layout of `u64`.
    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::DISCRIMINATOR.len() + 8);
        data.extend_from_slice(Self::DISCRIMINATOR);
        data.extend_from_slice(&self.amount.to_le_bytes());
        data
    }

    /// Decode instruction data produced by [`Transfer::pack`].
    pub fn unpack(data: &[u8]) -> Option<Self> {
        let rest = data.strip_prefix(Self::DISCRIMINATOR)?;
        Self::try_from_slice(rest).ok()
    }
}

/// Build a token `Transfer` of `amount` base units from `source` to `destination`.
///
/// With no `signers` the `owner` signs directly. Otherwise `owner` is a multisig account
/// and each co-signer is appended after it.
pub fn transfer(
    token_program: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    signers: &[&Pubkey],
    amount: u64,
) -> Instruction {
    let data = Transfer { amount }.pack();

    let mut accounts = Vec::with_capacity(3 + signers.len());
    accounts.push(AccountMeta::new(*source, false));
    accounts.push(AccountMeta::new(*destination, false));
    accounts.push(AccountMeta::new_readonly(*owner, signers.is_empty()));
    for signer in signers {
        accounts.push(AccountMeta::new_readonly(**signer, true));
    }

    trace!(%token_program, amount, signers = signers.len(), "token transfer");
    Instruction {
        program_id: *token_program,
        accounts,
        data,
    }
}
