use alloc::string::String;

/// Everything that can go wrong while assembling an instruction.
///
/// Failures that only show up once a transaction is submitted (missing accounts, low
/// balances, program errors) are never detected here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The string is not a base58 encoding of exactly 32 bytes.
    #[error("invalid address `{0}`")]
    InvalidAddress(String),

    /// No bump seed in `0..=255` produced an off-curve address.
    #[error("unable to find a viable program address bump seed")]
    DerivationExhausted,

    /// A seed was longer than 32 bytes, or more than 16 seeds were supplied.
    #[error("length of the seed is too long for address generation")]
    MaxSeedLengthExceeded,

    /// The seeds hash to a valid ed25519 point, which cannot be a program address.
    #[error("provided seeds do not result in a valid address")]
    OnCurve,
}
