//! Checks whether a transaction satisfies a stored proof request.
//!
//! This runs as part of a state transition, so the result must only depend on the
//! arguments and the stored request. Nothing is written.

use btcspv::{
    extract_input_at_index, extract_outpoint, extract_output_at_index, extract_script,
    extract_value, hash256, validate_vin, validate_vout,
};
use cosmwasm_std::Storage;

use crate::error::ContractError;
use crate::registry::RequestRegistry;
use crate::state::RequestId;

/// The parts of a transaction a proof request can constrain
#[derive(Clone, Copy, Debug)]
pub struct TxCandidate<'a> {
    /// Index of the input that spends the requested outpoint
    pub input_index: u32,
    /// Index of the output that pays the requested script
    pub output_index: u32,
    pub vin: &'a [u8],
    pub vout: &'a [u8],
}

pub struct ProofValidator {
    registry: RequestRegistry,
}

impl ProofValidator {
    pub const fn new(registry: RequestRegistry) -> Self {
        Self { registry }
    }

    /// Checks `candidate` against request `id`.
    ///
    /// The checks run in a fixed order and the first failing one determines the error:
    /// structure of vin and vout, request lookup, active state, pays (script, then value),
    /// spends.
    pub fn check(
        &self,
        storage: &dyn Storage,
        candidate: &TxCandidate,
        id: RequestId,
    ) -> Result<(), ContractError> {
        if !validate_vin(candidate.vin) {
            return Err(ContractError::InvalidVin);
        }
        if !validate_vout(candidate.vout) {
            return Err(ContractError::InvalidVout);
        }

        let request = self.registry.get(storage, id)?;
        if !request.active_state {
            return Err(ContractError::ClosedRequest { id });
        }

        // A zero digest is indistinguishable from a real script hashing to zero.
        // We accept that since finding such a script is infeasible.
        if request.has_pays() {
            let output = extract_output_at_index(candidate.vout, candidate.output_index as usize)?;
            let digest = hash256(extract_script(output)?);
            if digest.as_slice() != request.pays.as_slice() {
                return Err(ContractError::RequestPays { id });
            }
            if request.pays_value != 0 && extract_value(output)? < request.pays_value {
                return Err(ContractError::RequestValue { id });
            }
        }

        if request.has_spends() {
            let input = extract_input_at_index(candidate.vin, candidate.input_index as usize)?;
            let digest = hash256(extract_outpoint(input)?);
            if digest.as_slice() != request.spends.as_slice() {
                return Err(ContractError::RequestSpends { id });
            }
        }

        Ok(())
    }
}
