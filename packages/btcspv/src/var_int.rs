use crate::SpvError;

/// Number of payload bytes that follow a CompactSize flag byte
pub fn determine_var_int_data_length(flag: u8) -> usize {
    match flag {
        0xff => 8,
        0xfe => 4,
        0xfd => 2,
        _ => 0,
    }
}

/// Parses the CompactSize integer at the start of `bytes`.
///
/// Returns the number of payload bytes after the flag byte together with the decoded value.
/// A single-byte varint has a payload length of 0.
pub fn parse_var_int(bytes: &[u8]) -> Result<(usize, u64), SpvError> {
    let Some(&flag) = bytes.first() else {
        return Err(SpvError::ReadOverrun);
    };
    let data_length = determine_var_int_data_length(flag);
    if data_length == 0 {
        return Ok((0, u64::from(flag)));
    }

    let payload = bytes
        .get(1..1 + data_length)
        .ok_or(SpvError::ReadOverrun)?;
    let mut le = [0u8; 8];
    le[..data_length].copy_from_slice(payload);
    Ok((data_length, u64::from_le_bytes(le)))
}
