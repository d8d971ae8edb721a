use btcspv::SpvError;
use cosmwasm_std::StdError;
use thiserror::Error;

use crate::state::RequestId;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Spv(#[from] SpvError),

    #[error("Unauthorized")]
    Unauthorized,

    // Proof data
    #[error("Vin is not valid")]
    InvalidVin,

    #[error("Vout is not valid")]
    InvalidVout,

    // Requests
    #[error("Unknown request ID {id}")]
    UnknownRequest { id: RequestId },

    #[error("Request {id} is closed")]
    ClosedRequest { id: RequestId },

    #[error("Request {id} pays to a different script")]
    RequestPays { id: RequestId },

    #[error("Request {id} requires a higher output value")]
    RequestValue { id: RequestId },

    #[error("Request {id} spends a different outpoint")]
    RequestSpends { id: RequestId },

    #[error("Spends must be empty or a 36 byte outpoint.")]
    SpendsLength,

    #[error("Pays script exceeds length limit.")]
    PaysLength,

    #[error("Origin data exceeds length limit.")]
    OriginTooLong,

    #[error("Action data exceeds length limit.")]
    ActionTooLong,

    // Store consistency
    #[error("Request ID counter must be 8 bytes long but has {len} bytes")]
    MalformedCounter { len: usize },

    #[error("Request ID counter overflow")]
    RequestIdOverflow,

    #[error("Error serializing proof request: {msg}")]
    Serialization { msg: String },

    #[error("Error deserializing proof request {id}: {msg}")]
    Deserialization { id: RequestId, msg: String },
}

impl ContractError {
    /// True for errors that indicate a corrupted store rather than a rejected input.
    /// These are never expected under correct operation.
    pub fn is_store_fault(&self) -> bool {
        matches!(
            self,
            ContractError::MalformedCounter { .. }
                | ContractError::RequestIdOverflow
                | ContractError::Serialization { .. }
                | ContractError::Deserialization { .. }
        )
    }
}
