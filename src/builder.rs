//! Instruction builders for the associated token account, token and metadata programs.

use alloc::{vec, vec::Vec};
use tracing::trace;

use crate::{
    find_program_address, token, AccountMeta, Error, Instruction, Payload, ProgramIds, Pubkey,
};

/// Seed prefix of every metadata program address.
pub const METADATA_SEED: &[u8] = b"metadata";

/// Trailing seed of master edition addresses.
pub const EDITION_SEED: &[u8] = b"edition";

/// Amount moved by [`InstructionBuilder::transfer`]: a single unit, as for an NFT.
pub const NFT_TRANSFER_AMOUNT: u64 = 1;

/// Assembles instructions against one fixed set of program addresses.
///
/// Every method is a pure function of its arguments and the [`ProgramIds`] the builder was
/// created with. The account order of each instruction is fixed by the receiving program,
/// which reads accounts by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstructionBuilder {
    programs: ProgramIds,
}

impl InstructionBuilder {
    pub const fn new(programs: ProgramIds) -> Self {
        Self { programs }
    }

    pub const fn mainnet() -> Self {
        Self::new(ProgramIds::MAINNET)
    }

    pub const fn programs(&self) -> &ProgramIds {
        &self.programs
    }

    /// Create the associated token account of `wallet` for `mint`, paid for by `wallet`.
    pub fn create_associated_token_account(
        &self,
        wallet: &Pubkey,
        mint: &Pubkey,
        associated_token_address: &Pubkey,
    ) -> Instruction {
        self.create_associated_token_account_with(associated_token_address, wallet, wallet, mint)
    }

    /// Create the associated token account of `wallet` for `mint`, paid for by `payer`.
    pub fn create_associated_token_account_with(
        &self,
        associated_token_address: &Pubkey,
        payer: &Pubkey,
        wallet: &Pubkey,
        mint: &Pubkey,
    ) -> Instruction {
        let programs = &self.programs;
        let ix = Instruction {
            program_id: programs.associated_token_program,
            accounts: vec![
                AccountMeta::new(*payer, true),
                AccountMeta::new(*associated_token_address, false),
                AccountMeta::new_readonly(*wallet, false),
                AccountMeta::new_readonly(*mint, false),
                AccountMeta::new_readonly(programs.system_program, false),
                AccountMeta::new_readonly(programs.token_program, false),
                AccountMeta::new_readonly(programs.rent_sysvar, false),
            ],
            data: vec![],
        };
        trace!(program_id = %ix.program_id, %mint, "create associated token account");
        ix
    }

    /// Move exactly [`NFT_TRANSFER_AMOUNT`] token from `source` to `destination`.
    ///
    /// `owner` signs directly; use [`token::transfer`] for other amounts or multisig owners.
    pub fn transfer(
        &self,
        source: &Pubkey,
        destination: &Pubkey,
        owner: &Pubkey,
    ) -> Instruction {
        token::transfer(
            &self.programs.token_program,
            source,
            destination,
            owner,
            &[],
            NFT_TRANSFER_AMOUNT,
        )
    }

    pub fn create_metadata(
        &self,
        metadata: &Pubkey,
        mint: &Pubkey,
        mint_authority: &Pubkey,
        payer: &Pubkey,
        update_authority: &Pubkey,
        payload: Payload,
    ) -> Instruction {
        let programs = &self.programs;
        self.metadata_instruction(
            "create metadata",
            vec![
                AccountMeta::new(*metadata, false),
                AccountMeta::new_readonly(*mint, false),
                AccountMeta::new_readonly(*mint_authority, true),
                AccountMeta::new_readonly(*payer, true),
                AccountMeta::new_readonly(*update_authority, false),
                AccountMeta::new_readonly(programs.system_program, false),
                AccountMeta::new_readonly(programs.rent_sysvar, false),
            ],
            payload,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_master_edition(
        &self,
        metadata: &Pubkey,
        edition: &Pubkey,
        mint: &Pubkey,
        mint_authority: &Pubkey,
        payer: &Pubkey,
        update_authority: &Pubkey,
        payload: Payload,
    ) -> Instruction {
        let programs = &self.programs;
        self.metadata_instruction(
            "create master edition",
            vec![
                AccountMeta::new(*edition, false),
                AccountMeta::new(*mint, false),
                AccountMeta::new_readonly(*update_authority, true),
                AccountMeta::new_readonly(*mint_authority, true),
                AccountMeta::new_readonly(*payer, true),
                AccountMeta::new_readonly(*metadata, false),
                AccountMeta::new_readonly(programs.token_program, false),
                AccountMeta::new_readonly(programs.system_program, false),
                AccountMeta::new_readonly(programs.rent_sysvar, false),
            ],
            payload,
        )
    }

    /// An empty `payload` is passed through as-is.
    pub fn update_metadata(
        &self,
        metadata: &Pubkey,
        payer: &Pubkey,
        payload: Payload,
    ) -> Instruction {
        self.metadata_instruction(
            "update metadata",
            vec![
                AccountMeta::new(*metadata, false),
                AccountMeta::new_readonly(*payer, true),
            ],
            payload,
        )
    }

    /// Metadata account of `mint`, owned by the token metadata program.
    pub fn find_metadata_address(&self, mint: &Pubkey) -> Result<(Pubkey, u8), Error> {
        let program = &self.programs.token_metadata_program;
        find_program_address(&[METADATA_SEED, program.as_ref(), mint.as_ref()], program)
    }

    /// Master edition account of `mint`.
    pub fn find_master_edition_address(&self, mint: &Pubkey) -> Result<(Pubkey, u8), Error> {
        let program = &self.programs.token_metadata_program;
        find_program_address(
            &[METADATA_SEED, program.as_ref(), mint.as_ref(), EDITION_SEED],
            program,
        )
    }

    /// Associated token account holding `mint` for `wallet`.
    pub fn find_associated_token_address(
        &self,
        wallet: &Pubkey,
        mint: &Pubkey,
    ) -> Result<(Pubkey, u8), Error> {
        let programs = &self.programs;
        find_program_address(
            &[
                wallet.as_ref(),
                programs.token_program.as_ref(),
                mint.as_ref(),
            ],
            &programs.associated_token_program,
        )
    }

    fn metadata_instruction(
        &self,
        name: &'static str,
        accounts: Vec<AccountMeta>,
        payload: Payload,
    ) -> Instruction {
        let ix = Instruction {
            program_id: self.programs.token_metadata_program,
            accounts,
            data: payload.into_bytes(),
        };
        trace!(program_id = %ix.program_id, data_len = ix.data.len(), "{name}");
        ix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn flags(ix: &Instruction) -> Vec<(Pubkey, bool, bool)> {
        ix.accounts
            .iter()
            .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
            .collect()
    }

    #[test]
    fn test_create_associated_token_account() {
        let builder = InstructionBuilder::mainnet();
        let ids = builder.programs();
        let (payer, mint, ata) = (key(1), key(2), key(3));
        let ix = builder.create_associated_token_account(&payer, &mint, &ata);

        assert_eq!(ix.program_id, ids.associated_token_program);
        assert!(ix.data.is_empty());
        assert_eq!(
            flags(&ix),
            [
                (payer, true, true),
                (ata, false, true),
                (payer, false, false),
                (mint, false, false),
                (ids.system_program, false, false),
                (ids.token_program, false, false),
                (ids.rent_sysvar, false, false),
            ]
        );
    }

    #[test]
    fn test_create_associated_token_account_separate_payer() {
        let builder = InstructionBuilder::mainnet();
        let ix = builder.create_associated_token_account_with(&key(3), &key(1), &key(4), &key(2));
        assert_eq!(ix.accounts[0], AccountMeta::new(key(1), true));
        assert_eq!(ix.accounts[2], AccountMeta::new_readonly(key(4), false));
    }

    #[test]
    fn test_transfer_is_one_unit() {
        let builder = InstructionBuilder::mainnet();
        let ix = builder.transfer(&key(1), &key(2), &key(3));
        assert_eq!(ix.program_id, builder.programs().token_program);
        assert_eq!(token::Transfer::unpack(&ix.data), Some(token::Transfer { amount: 1 }));
        assert_eq!(
            flags(&ix),
            [(key(1), false, true), (key(2), false, true), (key(3), true, false)]
        );

        let other = builder.transfer(&key(1), &key(2), &key(7));
        assert_eq!(other.data, ix.data);
        assert_eq!(other.accounts[..2], ix.accounts[..2]);
        assert_eq!(other.accounts[2].pubkey, key(7));
    }

    #[test]
    fn test_create_metadata() {
        let builder = InstructionBuilder::mainnet();
        let ids = builder.programs();
        let ix = builder.create_metadata(
            &key(1),
            &key(2),
            &key(3),
            &key(4),
            &key(5),
            Payload::new(vec![0, 1, 2]),
        );
        assert_eq!(ix.program_id, ids.token_metadata_program);
        assert_eq!(ix.data, [0, 1, 2]);
        assert_eq!(
            flags(&ix),
            [
                (key(1), false, true),
                (key(2), false, false),
                (key(3), true, false),
                (key(4), true, false),
                (key(5), false, false),
                (ids.system_program, false, false),
                (ids.rent_sysvar, false, false),
            ]
        );
    }

    #[test]
    fn test_create_master_edition() {
        let builder = InstructionBuilder::mainnet();
        let ids = builder.programs();
        let ix = builder.create_master_edition(
            &key(1),
            &key(2),
            &key(3),
            &key(4),
            &key(5),
            &key(6),
            Payload::new(vec![10]),
        );
        assert_eq!(ix.program_id, ids.token_metadata_program);
        assert_eq!(ix.data, [10]);
        assert_eq!(
            flags(&ix),
            [
                (key(2), false, true),
                (key(3), false, true),
                (key(6), true, false),
                (key(4), true, false),
                (key(5), true, false),
                (key(1), false, false),
                (ids.token_program, false, false),
                (ids.system_program, false, false),
                (ids.rent_sysvar, false, false),
            ]
        );
    }

    #[test]
    fn test_update_metadata_empty_payload() {
        let builder = InstructionBuilder::mainnet();
        let ix = builder.update_metadata(&key(1), &key(2), Payload::default());
        assert_eq!(ix.program_id, builder.programs().token_metadata_program);
        assert!(ix.data.is_empty());
        assert_eq!(flags(&ix), [(key(1), false, true), (key(2), true, false)]);
    }

    #[test]
    fn test_custom_program_ids() {
        let programs = ProgramIds {
            token_metadata_program: key(200),
            ..ProgramIds::MAINNET
        };
        let builder = InstructionBuilder::new(programs);
        let ix = builder.update_metadata(&key(1), &key(2), Payload::default());
        assert_eq!(ix.program_id, key(200));
    }

    #[test]
    fn test_find_metadata_address() {
        let builder = InstructionBuilder::mainnet();
        let program = builder.programs().token_metadata_program;
        let mint = key(2);
        let (address, bump) = builder.find_metadata_address(&mint).unwrap();
        assert_eq!(
            crate::create_program_address(
                &[METADATA_SEED, program.as_ref(), mint.as_ref(), &[bump]],
                &program
            ),
            Ok(address)
        );
        assert_eq!(builder.find_metadata_address(&mint), Ok((address, bump)));

        let (edition, _) = builder.find_master_edition_address(&mint).unwrap();
        assert_ne!(edition, address);
    }
}
