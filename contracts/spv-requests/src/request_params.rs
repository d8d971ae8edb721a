use btcspv::OUTPOINT_LEN;

use crate::error::ContractError;

/// A length-prefixed script of the largest standard output type (P2TR, P2WSH)
/// is 35 bytes. Some room for non-standard scripts.
const MAX_PAYS_LEN: usize = 50;

/// Origin and action are opaque to this contract but stored for every request,
/// so keep them bounded
const MAX_ORIGIN_LEN: usize = 512;
const MAX_ACTION_LEN: usize = 512;

pub fn validate_spends(spends: &[u8]) -> Result<(), ContractError> {
    if spends.is_empty() || spends.len() == OUTPOINT_LEN {
        Ok(())
    } else {
        Err(ContractError::SpendsLength)
    }
}

pub fn validate_pays(pays: &[u8]) -> Result<(), ContractError> {
    if pays.len() > MAX_PAYS_LEN {
        Err(ContractError::PaysLength)
    } else {
        Ok(())
    }
}

pub fn validate_origin(origin: &[u8]) -> Result<(), ContractError> {
    if origin.len() > MAX_ORIGIN_LEN {
        Err(ContractError::OriginTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_action(action: &[u8]) -> Result<(), ContractError> {
    if action.len() > MAX_ACTION_LEN {
        Err(ContractError::ActionTooLong)
    } else {
        Ok(())
    }
}
