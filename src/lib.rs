//! A minimal library for building NFT instructions against the SPL token, associated token
//! account and token metadata programs.
//!
//! Every builder returns a complete [`Instruction`] with its accounts in the exact order the
//! receiving program expects. Nothing is sent anywhere: signing, submission and metadata
//! payload encoding belong to the caller.
//!
//! ```
//! use micro_nft_client::{InstructionBuilder, Payload, Pubkey};
//!
//! let builder = InstructionBuilder::mainnet();
//! let mint = Pubkey::new_from_array([7; 32]);
//! let payer = Pubkey::new_from_array([9; 32]);
//!
//! let (metadata, _bump) = builder.find_metadata_address(&mint).unwrap();
//! let ix = builder.update_metadata(&metadata, &payer, Payload::default());
//! assert_eq!(ix.accounts.len(), 2);
//! ```
#![no_std]

#[doc(hidden)]
pub extern crate alloc;

#[doc(hidden)]
pub extern crate borsh;

mod address;
mod builder;
mod error;
mod payload;
mod programs;
pub mod token;

#[cfg(not(feature = "solana-pubkey"))]
mod solana_pubkey;
#[cfg(not(feature = "solana-instruction"))]
mod solana_instruction;

pub use solana_pubkey::{Pubkey, pubkey};
pub use solana_instruction::{AccountMeta, Instruction};

pub use address::{
    create_program_address, find_program_address, is_on_curve, parse_address, MAX_SEEDS,
    MAX_SEED_LEN,
};
pub use builder::{InstructionBuilder, EDITION_SEED, METADATA_SEED, NFT_TRANSFER_AMOUNT};
pub use error::Error;
pub use payload::Payload;
pub use programs::ProgramIds;
