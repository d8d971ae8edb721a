use btcspv::ZERO_DIGEST;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_vec, HexBinary, Order, Storage};

use super::{RequestId, Sequence, TopKey};
use crate::error::ContractError;

const REQUEST_KEY_LEN: usize = 9;

/// The counter for request IDs. It lives in the same namespace as the requests
/// and cannot collide with them because request keys are exactly 9 bytes long.
pub const REQUEST_ID_SEQUENCE: Sequence = Sequence::new(b"rRequestID");

/// An outstanding condition that is satisfied by a transaction proof
#[cw_serde]
pub struct ProofRequest {
    /// hash256 of the outpoint that must be spent. All zero if the request has no spend constraint.
    pub spends: HexBinary,
    /// hash256 of the length-prefixed output script that must be paid.
    /// All zero if the request has no pay constraint.
    pub pays: HexBinary,
    /// Minimum value of the paying output in satoshis. 0 for no minimum.
    /// Only checked together with a pay constraint.
    pub pays_value: u64,
    pub active_state: bool,
    /// Confirmations a proof needs. Enforced by the proof verification, not here.
    pub num_confs: u8,
    /// Opaque data about who created the request
    pub origin: HexBinary,
    /// Opaque data to be acted upon once the request is satisfied
    pub action: HexBinary,
}

impl ProofRequest {
    pub fn has_spends(&self) -> bool {
        self.spends.as_slice() != ZERO_DIGEST.as_slice()
    }

    pub fn has_pays(&self) -> bool {
        self.pays.as_slice() != ZERO_DIGEST.as_slice()
    }
}

// Raw keys instead of a `Map` since the ID counter shares the `r` namespace with the records.
// The big-endian ID keeps the key order equal to the numeric order.
fn request_key(id: RequestId) -> [u8; REQUEST_KEY_LEN] {
    let bytes = id.to_be_bytes();
    [
        TopKey::Requests.as_byte(),
        bytes[0],
        bytes[1],
        bytes[2],
        bytes[3],
        bytes[4],
        bytes[5],
        bytes[6],
        bytes[7],
    ]
}

pub fn has_request(storage: &dyn Storage, id: RequestId) -> bool {
    storage.get(&request_key(id)).is_some()
}

pub fn load_request(storage: &dyn Storage, id: RequestId) -> Result<ProofRequest, ContractError> {
    let raw = storage
        .get(&request_key(id))
        .ok_or(ContractError::UnknownRequest { id })?;
    decode_request(id, &raw)
}

pub fn save_request(
    storage: &mut dyn Storage,
    id: RequestId,
    request: &ProofRequest,
) -> Result<(), ContractError> {
    let raw = to_json_vec(request).map_err(|err| ContractError::Serialization {
        msg: err.to_string(),
    })?;
    storage.set(&request_key(id), &raw);
    Ok(())
}

/// Requests in ascending ID order, starting after `start_after`
pub fn requests_range(
    storage: &dyn Storage,
    start_after: Option<RequestId>,
    limit: usize,
) -> Result<Vec<(RequestId, ProofRequest)>, ContractError> {
    let start = match start_after {
        Some(id) => match id.next() {
            Some(next) => request_key(next),
            None => return Ok(vec![]),
        },
        None => request_key(RequestId::default()),
    };
    let end = [TopKey::Requests.as_byte() + 1];

    storage
        .range(Some(start.as_slice()), Some(end.as_slice()), Order::Ascending)
        // the sequence key does not parse as an ID
        .filter_map(|(key, raw)| RequestId::from_be_slice(key.get(1..)?).map(|id| (id, raw)))
        .take(limit)
        .map(|(id, raw)| Ok((id, decode_request(id, &raw)?)))
        .collect()
}

fn decode_request(id: RequestId, raw: &[u8]) -> Result<ProofRequest, ContractError> {
    let request: ProofRequest = from_json(raw).map_err(|err| ContractError::Deserialization {
        id,
        msg: err.to_string(),
    })?;
    if request.spends.len() != ZERO_DIGEST.len() || request.pays.len() != ZERO_DIGEST.len() {
        return Err(ContractError::Deserialization {
            id,
            msg: "digests must be 32 bytes long".to_string(),
        });
    }
    Ok(request)
}
