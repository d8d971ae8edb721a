use std::fmt;

/// Handle of a proof request. IDs are assigned sequentially starting at 0.
///
/// The big-endian encoding is used as storage key, such that the key order
/// matches the numeric order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn u64(&self) -> u64 {
        self.0
    }

    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Parses the 8 byte big-endian encoding. Returns None for any other length.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        let array: [u8; 8] = bytes.try_into().ok()?;
        Some(Self(u64::from_be_bytes(array)))
    }

    /// The following ID or None if the ID space is exhausted
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for RequestId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_be_bytes_works() {
        assert_eq!(RequestId::new(0).to_be_bytes(), [0; 8]);
        assert_eq!(RequestId::new(1).to_be_bytes(), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(
            RequestId::new(0x0102030405060708).to_be_bytes(),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn from_be_slice_works() {
        assert_eq!(
            RequestId::from_be_slice(&[0, 0, 0, 0, 0, 0, 1, 0]),
            Some(RequestId::new(256))
        );
        assert_eq!(RequestId::from_be_slice(&[]), None);
        assert_eq!(RequestId::from_be_slice(&[0; 7]), None);
        assert_eq!(RequestId::from_be_slice(&[0; 9]), None);
    }

    #[test]
    fn next_works() {
        assert_eq!(RequestId::new(0).next(), Some(RequestId::new(1)));
        assert_eq!(RequestId::new(u64::MAX - 1).next(), Some(RequestId::new(u64::MAX)));
        assert_eq!(RequestId::new(u64::MAX).next(), None);
    }

    #[test]
    fn key_order_matches_numeric_order() {
        let ids = [0u64, 1, 255, 256, 65_536, u64::MAX];
        for pair in ids.windows(2) {
            let (a, b) = (RequestId::new(pair[0]), RequestId::new(pair[1]));
            assert!(a < b);
            assert!(a.to_be_bytes() < b.to_be_bytes());
        }
    }

    #[test]
    fn display_works() {
        assert_eq!(RequestId::new(42).to_string(), "42");
    }
}
