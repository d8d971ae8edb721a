//! The registry assigns sequential IDs to proof requests and keeps track of their state

use btcspv::{hash256, ZERO_DIGEST};
use cosmwasm_std::{Event, HexBinary, Storage};

use crate::attributes::{
    ATTR_ORIGIN, ATTR_PAYS, ATTR_PAYS_VALUE, ATTR_REQUEST_ID, ATTR_SPENDS, EVENT_PROOF_REQUEST,
};
use crate::error::ContractError;
use crate::state::{
    has_request, load_request, requests_range, save_request, ProofRequest, RequestId, Sequence,
};

/// The data a requester submits. Digests are calculated by the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRequest {
    /// Outpoint that must be spent. Empty for no spend constraint.
    pub spends: HexBinary,
    /// Length-prefixed output script that must be paid. Empty for no pay constraint.
    pub pays: HexBinary,
    pub pays_value: u64,
    pub num_confs: u8,
    pub origin: HexBinary,
    pub action: HexBinary,
}

#[derive(Clone, Debug)]
pub struct CreationReceipt {
    pub id: RequestId,
    /// The `proof_request` event. Must be added to the response by the caller.
    pub event: Event,
}

#[derive(Clone, Copy, Debug)]
pub struct RequestRegistry {
    sequence: Sequence<'static>,
}

impl RequestRegistry {
    pub const fn new(sequence: Sequence<'static>) -> Self {
        Self { sequence }
    }

    /// Stores a new active request under the next free ID
    pub fn create(
        &self,
        storage: &mut dyn Storage,
        new_request: NewRequest,
    ) -> Result<CreationReceipt, ContractError> {
        let NewRequest {
            spends,
            pays,
            pays_value,
            num_confs,
            origin,
            action,
        } = new_request;

        let request = ProofRequest {
            spends: digest_or_zero(&spends),
            pays: digest_or_zero(&pays),
            pays_value,
            active_state: true,
            num_confs,
            origin: origin.clone(),
            action,
        };

        let id = self.sequence.peek_next(storage)?;
        save_request(storage, id, &request)?;
        self.sequence.advance(storage)?;

        let event = Event::new(EVENT_PROOF_REQUEST)
            .add_attribute(ATTR_REQUEST_ID, id.to_string())
            .add_attribute(ATTR_PAYS, pays.to_hex())
            .add_attribute(ATTR_SPENDS, spends.to_hex())
            .add_attribute(ATTR_PAYS_VALUE, pays_value.to_string())
            .add_attribute(ATTR_ORIGIN, origin.to_hex());

        Ok(CreationReceipt { id, event })
    }

    pub fn exists(&self, storage: &dyn Storage, id: RequestId) -> bool {
        has_request(storage, id)
    }

    pub fn get(&self, storage: &dyn Storage, id: RequestId) -> Result<ProofRequest, ContractError> {
        load_request(storage, id)
    }

    /// Opens or closes a request. All other fields stay untouched.
    pub fn set_active(
        &self,
        storage: &mut dyn Storage,
        id: RequestId,
        active: bool,
    ) -> Result<(), ContractError> {
        let mut request = load_request(storage, id)?;
        request.active_state = active;
        save_request(storage, id, &request)
    }

    pub fn list(
        &self,
        storage: &dyn Storage,
        start_after: Option<RequestId>,
        limit: usize,
    ) -> Result<Vec<(RequestId, ProofRequest)>, ContractError> {
        requests_range(storage, start_after, limit)
    }

    /// The ID the next created request will get. Does not write to storage.
    pub fn next_id(&self, storage: &dyn Storage) -> Result<RequestId, ContractError> {
        self.sequence.current(storage)
    }
}

/// An empty pre-image means "no constraint", which is stored as the zero digest
fn digest_or_zero(preimage: &[u8]) -> HexBinary {
    if preimage.is_empty() {
        HexBinary::from(ZERO_DIGEST.as_slice())
    } else {
        HexBinary::from(hash256(preimage).as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::REQUEST_ID_SEQUENCE;
    use cosmwasm_std::testing::MockStorage;

    const REGISTRY: RequestRegistry = RequestRegistry::new(REQUEST_ID_SEQUENCE);

    fn make_new_request(pays_value: u64) -> NewRequest {
        NewRequest {
            spends: HexBinary::from(vec![0x33; 36]),
            pays: HexBinary::from_hex("160014758ce550380d964051086798d6546bebdca27a73").unwrap(),
            pays_value,
            num_confs: 4,
            origin: HexBinary::from(b"chain-a/contract-b".to_vec()),
            action: HexBinary::from_hex("deadbeef").unwrap(),
        }
    }

    /// Gets the value of the first attribute with the given key
    fn first_attr(event: &Event, search_key: &str) -> Option<String> {
        event.attributes.iter().find_map(|a| {
            if a.key == search_key {
                Some(a.value.clone())
            } else {
                None
            }
        })
    }

    #[test]
    fn create_works() {
        let mut storage = MockStorage::new();
        let new_request = make_new_request(1000);

        let CreationReceipt { id, event } =
            REGISTRY.create(&mut storage, new_request.clone()).unwrap();
        assert_eq!(id, RequestId::new(0));

        let request = REGISTRY.get(&storage, id).unwrap();
        assert_eq!(
            request,
            ProofRequest {
                spends: HexBinary::from(hash256(&new_request.spends).as_slice()),
                pays: HexBinary::from(hash256(&new_request.pays).as_slice()),
                pays_value: 1000,
                active_state: true,
                num_confs: 4,
                origin: new_request.origin.clone(),
                action: new_request.action.clone(),
            }
        );

        assert_eq!(event.ty, "proof_request");
        assert_eq!(first_attr(&event, "request_id").unwrap(), "0");
        assert_eq!(
            first_attr(&event, "pays").unwrap(),
            "160014758ce550380d964051086798d6546bebdca27a73"
        );
        assert_eq!(first_attr(&event, "spends").unwrap(), "33".repeat(36));
        assert_eq!(first_attr(&event, "pays_value").unwrap(), "1000");
        assert_eq!(
            first_attr(&event, "origin").unwrap(),
            hex_of(b"chain-a/contract-b")
        );
    }

    fn hex_of(data: &[u8]) -> String {
        HexBinary::from(data).to_hex()
    }

    #[test]
    fn create_uses_zero_digest_for_empty_constraints() {
        let mut storage = MockStorage::new();
        let new_request = NewRequest {
            spends: HexBinary::default(),
            pays: HexBinary::default(),
            ..make_new_request(0)
        };
        let receipt = REGISTRY.create(&mut storage, new_request).unwrap();

        let request = REGISTRY.get(&storage, receipt.id).unwrap();
        assert_eq!(request.spends.as_slice(), &ZERO_DIGEST);
        assert_eq!(request.pays.as_slice(), &ZERO_DIGEST);
        assert!(!request.has_spends());
        assert!(!request.has_pays());
        assert_eq!(first_attr(&receipt.event, "pays").unwrap(), "");
        assert_eq!(first_attr(&receipt.event, "spends").unwrap(), "");
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut storage = MockStorage::new();
        assert_eq!(REGISTRY.next_id(&storage).unwrap(), RequestId::new(0));

        for expected in 0..5u64 {
            let receipt = REGISTRY
                .create(&mut storage, make_new_request(expected))
                .unwrap();
            assert_eq!(receipt.id, RequestId::new(expected));

            // Lookups and state changes in between do not affect allocation
            REGISTRY.get(&storage, receipt.id).unwrap();
            REGISTRY.set_active(&mut storage, receipt.id, false).unwrap();
            REGISTRY.set_active(&mut storage, RequestId::new(0), true).unwrap();
            assert_eq!(
                REGISTRY.next_id(&storage).unwrap(),
                RequestId::new(expected + 1)
            );
        }

        let ids: Vec<u64> = REGISTRY
            .list(&storage, None, 100)
            .unwrap()
            .into_iter()
            .map(|(id, request)| {
                assert_eq!(request.pays_value, id.u64());
                id.u64()
            })
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn get_is_idempotent() {
        let mut storage = MockStorage::new();
        let id = REGISTRY
            .create(&mut storage, make_new_request(5))
            .unwrap()
            .id;
        let first = REGISTRY.get(&storage, id).unwrap();
        let second = REGISTRY.get(&storage, id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn set_active_round_trip() {
        let mut storage = MockStorage::new();
        let id = REGISTRY
            .create(&mut storage, make_new_request(5))
            .unwrap()
            .id;
        let original = REGISTRY.get(&storage, id).unwrap();

        REGISTRY.set_active(&mut storage, id, false).unwrap();
        let closed = REGISTRY.get(&storage, id).unwrap();
        assert!(!closed.active_state);
        assert_eq!(
            closed,
            ProofRequest {
                active_state: false,
                ..original.clone()
            }
        );

        REGISTRY.set_active(&mut storage, id, true).unwrap();
        assert_eq!(REGISTRY.get(&storage, id).unwrap(), original);

        // Setting the current state again is fine
        REGISTRY.set_active(&mut storage, id, true).unwrap();
        assert_eq!(REGISTRY.get(&storage, id).unwrap(), original);
    }

    #[test]
    fn unknown_request_fails() {
        let mut storage = MockStorage::new();
        let id = RequestId::new(12);
        assert!(!REGISTRY.exists(&storage, id));
        assert_eq!(
            REGISTRY.get(&storage, id).unwrap_err(),
            ContractError::UnknownRequest { id }
        );
        assert_eq!(
            REGISTRY.set_active(&mut storage, id, false).unwrap_err(),
            ContractError::UnknownRequest { id }
        );
        // A failed state change does not create the request
        assert!(!REGISTRY.exists(&storage, id));
    }

    #[test]
    fn create_fails_for_malformed_counter() {
        let mut storage = MockStorage::new();
        storage.set(b"rRequestID", &[0, 1]);
        let err = REGISTRY
            .create(&mut storage, make_new_request(0))
            .unwrap_err();
        assert_eq!(err, ContractError::MalformedCounter { len: 2 });
        assert!(err.is_store_fault());
    }

    #[test]
    fn create_fails_when_ids_are_exhausted() {
        let mut storage = MockStorage::new();
        storage.set(b"rRequestID", &u64::MAX.to_be_bytes());
        let err = REGISTRY
            .create(&mut storage, make_new_request(0))
            .unwrap_err();
        assert_eq!(err, ContractError::RequestIdOverflow);
        assert_eq!(
            REGISTRY.next_id(&storage).unwrap(),
            RequestId::new(u64::MAX)
        );
    }
}
