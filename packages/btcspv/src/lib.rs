//! Slice helpers for the parts of a Bitcoin transaction a proof request commits to.
//!
//! All functions work on the raw wire encoding of the input vector (`vin`) and the
//! output vector (`vout`), including their leading CompactSize counts. Nothing here
//! allocates or panics on malformed data.

mod error;
mod hash;
mod tx;
mod var_int;

pub mod testing;

pub use error::SpvError;
pub use hash::{hash256, Hash256Digest, ZERO_DIGEST};
pub use tx::{
    determine_input_length, determine_output_length, extract_input_at_index, extract_outpoint,
    extract_output_at_index, extract_script, extract_value, validate_vin, validate_vout,
    OUTPOINT_LEN,
};
pub use var_int::{determine_var_int_data_length, parse_var_int};
