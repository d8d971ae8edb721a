use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::HexBinary;

use crate::state::{Config, ProofRequest};

#[cw_serde]
pub struct InstantiateMsg {
    /// The address allowed to close and reopen requests
    pub manager: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers a new proof request. Anyone can do this.
    NewRequest {
        /// The outpoint (txid and index, 36 bytes) that must be spent.
        /// Leave empty for no spend constraint.
        spends: HexBinary,
        /// The length-prefixed output script that must be paid.
        /// Leave empty for no pay constraint.
        pays: HexBinary,
        /// Minimum value of the paying output in satoshis. Only used with `pays`.
        pays_value: u64,
        num_confs: u8,
        origin: HexBinary,
        action: HexBinary,
    },
    /// Opens or closes a request
    SetRequestState { id: u64, active: bool },
    /// Set the config
    SetConfig { manager: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the config state
    #[returns(ConfigResponse)]
    Config {},
    /// Gets a single request by ID. Fails if the request does not exist.
    #[returns(RequestResponse)]
    Request { id: u64 },
    /// Gets requests in ascending ID order
    #[returns(RequestsResponse)]
    Requests {
        /// The ID after which to start
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// The ID the next request will get
    #[returns(NextRequestIdResponse)]
    NextRequestId {},
    /// Checks whether the given transaction data satisfies a request
    #[returns(CheckRequestResponse)]
    CheckRequest {
        input_index: u32,
        output_index: u32,
        vin: HexBinary,
        vout: HexBinary,
        id: u64,
    },
}

// We define a custom struct for each query response
pub type ConfigResponse = Config;

#[cw_serde]
pub struct RequestResponse {
    pub id: u64,
    pub request: ProofRequest,
}

#[cw_serde]
pub struct RequestsResponse {
    pub requests: Vec<RequestResponse>,
}

#[cw_serde]
pub struct NextRequestIdResponse {
    pub id: u64,
}

#[cw_serde]
pub struct CheckRequestResponse {
    pub valid: bool,
    /// Why the transaction does not satisfy the request. None if valid.
    pub error: Option<String>,
}
