//! Stable event attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients rely on them.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";

/// Type of the event emitted once a proof request is stored
pub const EVENT_PROOF_REQUEST: &str = "proof_request";

/// Decimal request ID
pub const ATTR_REQUEST_ID: &str = "request_id";
/// Hex encoded length-prefixed output script as submitted by the requester
pub const ATTR_PAYS: &str = "pays";
/// Hex encoded outpoint as submitted by the requester
pub const ATTR_SPENDS: &str = "spends";
/// Minimum output value in satoshis
pub const ATTR_PAYS_VALUE: &str = "pays_value";
/// Hex encoded origin
pub const ATTR_ORIGIN: &str = "origin";
/// "true" or "false"
pub const ATTR_ACTIVE: &str = "active";
