//! Error types for the vending machine.

use thiserror::Error;

use crate::Amount;
use crate::catalog::Code;

/// Returned to the caller when an input breaks the machine's contract.
///
/// These never change machine state and never reach an output channel.
#[derive(Debug, Error, PartialEq)]
pub enum MachineError {
    #[error("invalid argument: not a coin (radius: {radius}, mass: {mass})")]
    InvalidArgument { radius: f64, mass: f64 },
}

/// Why a completed two-key selection did not vend.
///
/// Selection failures are silent on the channels; they only show up in logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no product at {0}")]
    UnknownCode(Code),

    #[error("insufficient funds for {code}: balance {balance}, price {price}")]
    InsufficientFunds {
        code: Code,
        balance: Amount,
        price: Amount,
    },
}
