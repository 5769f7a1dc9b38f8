use crate::{pubkey, Pubkey};

/// The on-chain programs and sysvars every builder refers to.
///
/// Loaded once (usually [`ProgramIds::MAINNET`]) and handed to
/// [`InstructionBuilder`](crate::InstructionBuilder), which never changes it. Swap in a
/// different set to target a cluster where the programs are deployed elsewhere.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramIds {
    pub associated_token_program: Pubkey,
    pub token_program: Pubkey,
    /// Target of the metadata builders and owner of metadata and edition accounts.
    pub token_metadata_program: Pubkey,
    pub metaplex_program: Pubkey,
    pub auction_house_program: Pubkey,
    pub system_program: Pubkey,
    pub rent_sysvar: Pubkey,
}

impl ProgramIds {
    pub const MAINNET: Self = Self {
        associated_token_program: pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"),
        token_program: pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
        token_metadata_program: pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"),
        metaplex_program: pubkey!("p1exdMJcjVao65QdewkaZRUnU6VPSXhus9n2GzWfh98"),
        auction_house_program: pubkey!("hausS13jsjafwWwGqZTUQRmWyvyxn9EQpqMwV1PBBmk"),
        system_program: pubkey!("11111111111111111111111111111111"),
        rent_sysvar: pubkey!("SysvarRent111111111111111111111111111111111"),
    };
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self::MAINNET
    }
}
