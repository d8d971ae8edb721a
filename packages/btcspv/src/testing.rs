//! Builders for wire-encoded transaction parts, for use in tests.
//! Script lengths must stay below 0xfd so a single-byte length prefix is enough.

/// An input spending output `index` of the transaction with ID `txid`
pub fn make_input(txid: [u8; 32], index: u32, script_sig: &[u8]) -> Vec<u8> {
    let mut out = txid.to_vec();
    out.extend_from_slice(&index.to_le_bytes());
    out.push(script_len(script_sig));
    out.extend_from_slice(script_sig);
    out.extend_from_slice(&[0xff; 4]);
    out
}

pub fn make_output(value: u64, script: &[u8]) -> Vec<u8> {
    let mut out = value.to_le_bytes().to_vec();
    out.push(script_len(script));
    out.extend_from_slice(script);
    out
}

/// Prefixes the concatenated items with their count, as in a vin or vout
pub fn make_vector(items: &[Vec<u8>]) -> Vec<u8> {
    let count = u8::try_from(items.len()).expect("too many items for a single-byte count");
    assert!(count < 0xfd, "too many items for a single-byte count");
    let mut out = vec![count];
    for item in items {
        out.extend_from_slice(item);
    }
    out
}

/// The pre-image a pay digest is computed over: length prefix followed by the script
pub fn length_prefixed(script: &[u8]) -> Vec<u8> {
    let mut out = vec![script_len(script)];
    out.extend_from_slice(script);
    out
}

fn script_len(script: &[u8]) -> u8 {
    let len = u8::try_from(script.len()).expect("script too long");
    assert!(len < 0xfd, "script too long for a single-byte length prefix");
    len
}
