use cosmwasm_std::Storage;

use super::RequestId;
use crate::error::ContractError;

/// A counter stored as 8 big-endian bytes under a single raw key.
///
/// Use [`Sequence::peek_next`] to get the ID for a new record, store the record and
/// then call [`Sequence::advance`]. Both must run in the same transaction.
#[derive(Clone, Copy, Debug)]
pub struct Sequence<'a> {
    key: &'a [u8],
}

impl<'a> Sequence<'a> {
    pub const fn new(key: &'a [u8]) -> Self {
        Self { key }
    }

    /// The ID the next record gets. Writes the zero value if the counter does not exist yet.
    pub fn peek_next(&self, storage: &mut dyn Storage) -> Result<RequestId, ContractError> {
        if storage.get(self.key).is_none() {
            storage.set(self.key, &RequestId::default().to_be_bytes());
        }
        self.current(storage)
    }

    /// Read-only version of [`Sequence::peek_next`]. A missing counter reads as zero.
    pub fn current(&self, storage: &dyn Storage) -> Result<RequestId, ContractError> {
        match storage.get(self.key) {
            None => Ok(RequestId::default()),
            Some(raw) => RequestId::from_be_slice(&raw)
                .ok_or(ContractError::MalformedCounter { len: raw.len() }),
        }
    }

    /// Increments the counter and returns the new value.
    /// Fails instead of wrapping around once the ID space is exhausted.
    pub fn advance(&self, storage: &mut dyn Storage) -> Result<RequestId, ContractError> {
        let current = self.peek_next(storage)?;
        let next = current.next().ok_or(ContractError::RequestIdOverflow)?;
        storage.set(self.key, &next.to_be_bytes());
        Ok(next)
    }
}
