use crate::{parse_var_int, SpvError};

/// Length of a previous-output reference: 32 byte txid followed by a 4 byte index
pub const OUTPOINT_LEN: usize = 36;
const SEQUENCE_LEN: usize = 4;
const VALUE_LEN: usize = 8;

type ItemLength = fn(&[u8]) -> Result<usize, SpvError>;

/// Length in bytes of the input at the start of `input`.
///
/// The result is derived from the encoded script length only. It may exceed `input.len()`.
pub fn determine_input_length(input: &[u8]) -> Result<usize, SpvError> {
    let script_sig = input.get(OUTPOINT_LEN..).ok_or(SpvError::MalformedInput)?;
    let (data_length, script_sig_len) = parse_var_int(script_sig)?;
    usize::try_from(script_sig_len)
        .ok()
        .and_then(|len| len.checked_add(OUTPOINT_LEN + 1 + data_length + SEQUENCE_LEN))
        .ok_or(SpvError::MalformedInput)
}

/// Length in bytes of the output at the start of `output`.
///
/// The result is derived from the encoded script length only. It may exceed `output.len()`.
pub fn determine_output_length(output: &[u8]) -> Result<usize, SpvError> {
    let script = output.get(VALUE_LEN..).ok_or(SpvError::MalformedOutput)?;
    let (data_length, script_len) = parse_var_int(script)?;
    usize::try_from(script_len)
        .ok()
        .and_then(|len| len.checked_add(VALUE_LEN + 1 + data_length))
        .ok_or(SpvError::MalformedOutput)
}

/// Checks that `vin` is a non-empty input vector which is consumed exactly by its inputs
pub fn validate_vin(vin: &[u8]) -> bool {
    is_exact_vector(vin, determine_input_length)
}

/// Checks that `vout` is a non-empty output vector which is consumed exactly by its outputs
pub fn validate_vout(vout: &[u8]) -> bool {
    is_exact_vector(vout, determine_output_length)
}

pub fn extract_input_at_index(vin: &[u8], index: usize) -> Result<&[u8], SpvError> {
    item_at_index(vin, index, determine_input_length, SpvError::VinReadOverrun)
}

pub fn extract_output_at_index(vout: &[u8], index: usize) -> Result<&[u8], SpvError> {
    item_at_index(vout, index, determine_output_length, SpvError::VoutReadOverrun)
}

/// The outpoint (txid and output index) an input spends
pub fn extract_outpoint(input: &[u8]) -> Result<&[u8], SpvError> {
    input.get(..OUTPOINT_LEN).ok_or(SpvError::MalformedInput)
}

/// The value of an output in satoshis
pub fn extract_value(output: &[u8]) -> Result<u64, SpvError> {
    let value: [u8; VALUE_LEN] = output
        .get(..VALUE_LEN)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(SpvError::MalformedOutput)?;
    Ok(u64::from_le_bytes(value))
}

/// The length-prefixed output script, i.e. the output without its value
pub fn extract_script(output: &[u8]) -> Result<&[u8], SpvError> {
    output.get(VALUE_LEN..).ok_or(SpvError::MalformedOutput)
}

fn is_exact_vector(buf: &[u8], item_length: ItemLength) -> bool {
    let Ok((data_length, count)) = parse_var_int(buf) else {
        return false;
    };
    if count == 0 {
        return false;
    }

    let mut offset = 1 + data_length;
    for _ in 0..count {
        if offset >= buf.len() {
            return false;
        }
        let Ok(length) = item_length(&buf[offset..]) else {
            return false;
        };
        offset = match offset.checked_add(length) {
            Some(next) => next,
            None => return false,
        };
    }
    offset == buf.len()
}

fn item_at_index(
    buf: &[u8],
    index: usize,
    item_length: ItemLength,
    overrun: SpvError,
) -> Result<&[u8], SpvError> {
    let (data_length, count) = parse_var_int(buf)?;
    if index as u64 >= count {
        return Err(overrun);
    }

    let mut offset = 1 + data_length;
    for i in 0..=index {
        let remaining = buf.get(offset..).filter(|r| !r.is_empty()).ok_or(overrun)?;
        let length = item_length(remaining)?;
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= buf.len())
            .ok_or(overrun)?;
        if i == index {
            return Ok(&buf[offset..end]);
        }
        offset = end;
    }
    Err(overrun)
}
