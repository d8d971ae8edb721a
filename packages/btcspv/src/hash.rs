use sha2::{Digest, Sha256};

pub type Hash256Digest = [u8; 32];

/// The all-zero digest. Request digests equal to this value mean "no constraint".
pub const ZERO_DIGEST: Hash256Digest = [0u8; 32];

/// Bitcoin's double SHA-256
pub fn hash256(data: &[u8]) -> Hash256Digest {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash256_works() {
        assert_eq!(
            hex::encode(hash256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
        assert_eq!(hash256(b"abc"), hash256(b"abc"));
        assert_ne!(hash256(b"abc"), hash256(b"abd"));
        assert_ne!(hash256(b""), ZERO_DIGEST);
    }
}
