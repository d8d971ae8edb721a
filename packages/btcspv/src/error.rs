use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpvError {
    #[error("Read overrun during VarInt parsing")]
    ReadOverrun,

    #[error("Vin read overrun")]
    VinReadOverrun,

    #[error("Vout read overrun")]
    VoutReadOverrun,

    #[error("Input is too short or announces an impossible length")]
    MalformedInput,

    #[error("Output is too short or announces an impossible length")]
    MalformedOutput,
}
