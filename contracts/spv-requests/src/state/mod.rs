mod config;
mod request_id;
mod requests;
mod sequence;

pub use config::{Config, CONFIG};
pub use request_id::RequestId;
pub use requests::{
    has_request, load_request, requests_range, save_request, ProofRequest, REQUEST_ID_SEQUENCE,
};
pub use sequence::Sequence;

/// Top level storage key. Values must not conflict.
/// Each key is only one byte long to ensure we use the smallest possible storage keys.
#[repr(u8)]
#[derive(Clone, Copy)]
pub enum TopKey {
    Config = b'c',
    Requests = b'r',
}

impl TopKey {
    const fn as_str(&self) -> &'static str {
        match self {
            TopKey::Config => "c",
            TopKey::Requests => "r",
        }
    }

    const fn as_byte(&self) -> u8 {
        *self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_key_str_matches_byte() {
        for key in [TopKey::Config, TopKey::Requests] {
            assert_eq!(key.as_str().as_bytes(), &[key.as_byte()]);
        }
    }
}
