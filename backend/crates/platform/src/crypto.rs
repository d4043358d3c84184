//! Cryptographic Utilities
//!
//! [`HashCodec`] produces and verifies keyed digests over arbitrary strings.
//! A digest is packed together with its inputs as `value|digestHex|salt`,
//! which makes the packed string self-certifying: anyone holding the codec
//! key can re-derive the digest from the embedded salt.

use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Separator between the fields of a packed digest
pub const FIELD_SEPARATOR: char = '|';

/// Random salt length in bytes (hex-encoded to twice as many characters)
pub const SALT_BYTES: usize = 16;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a fresh hex-encoded salt
pub fn random_salt() -> String {
    hex::encode(random_bytes(SALT_BYTES))
}

/// Constant-time byte comparison
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Keyed digest codec (HMAC-SHA256)
#[derive(Clone)]
pub struct HashCodec {
    key: [u8; 32],
}

impl HashCodec {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    fn mac(&self, value: &str, salt: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        // Length prefix keeps ("ab", "c") and ("a", "bc") apart.
        mac.update(&(salt.len() as u64).to_be_bytes());
        mac.update(salt.as_bytes());
        mac.update(value.as_bytes());
        mac
    }

    /// Hex digest of `value` salted with `salt`
    pub fn digest(&self, value: &str, salt: &str) -> String {
        hex::encode(self.mac(value, salt).finalize().into_bytes())
    }

    /// Packed triple `value|digestHex|salt`
    ///
    /// A random salt is generated when `salt` is `None`.
    pub fn make_digest(&self, value: &str, salt: Option<&str>) -> String {
        let salt = salt.map_or_else(random_salt, str::to_owned);
        let digest = self.digest(value, &salt);
        format!("{value}{FIELD_SEPARATOR}{digest}{FIELD_SEPARATOR}{salt}")
    }

    /// Packed triple with the value field left empty: `|digestHex|salt`
    ///
    /// For secrets that must not be stored next to their digest.
    /// [`verify`](Self::verify) accepts it unchanged.
    pub fn make_blind_digest(&self, value: &str, salt: Option<&str>) -> String {
        let salt = salt.map_or_else(random_salt, str::to_owned);
        let digest = self.digest(value, &salt);
        format!("{FIELD_SEPARATOR}{digest}{FIELD_SEPARATOR}{salt}")
    }

    /// Whether `packed` is exactly what [`make_digest`](Self::make_digest) or
    /// [`make_blind_digest`](Self::make_blind_digest) would produce for `value`
    ///
    /// The salt is the last field and the digest the one before it, so a
    /// value containing the separator still verifies. Everything left of the
    /// digest must be `value` itself or empty, and the digest must match the
    /// lowercase hex encoding byte for byte.
    pub fn verify(&self, value: &str, packed: &str) -> bool {
        let mut fields = packed.rsplitn(3, FIELD_SEPARATOR);
        let (Some(salt), Some(digest_hex), Some(prefix)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return false;
        };

        if !prefix.is_empty() && prefix != value {
            return false;
        }

        let expected = self.digest(value, salt);
        constant_time_eq(expected.as_bytes(), digest_hex.as_bytes())
    }
}

impl std::fmt::Debug for HashCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashCodec").field("key", &"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> HashCodec {
        HashCodec::new([7u8; 32])
    }

    #[test]
    fn test_digest_known_value() {
        assert_eq!(
            codec().digest("42", "salt"),
            "18c57d2eac240c007fcba767058dba4ca75421ea56fac0e7c2c21a97f3a4f649"
        );
    }

    #[test]
    fn test_digest_salt_boundary_is_unambiguous() {
        assert_ne!(codec().digest("ab", "c"), codec().digest("a", "bc"));
    }

    #[test]
    fn test_make_digest_layout() {
        let packed = codec().make_digest("42", Some("salt"));
        assert_eq!(
            packed,
            "42|18c57d2eac240c007fcba767058dba4ca75421ea56fac0e7c2c21a97f3a4f649|salt"
        );
    }

    #[test]
    fn test_make_digest_random_salt() {
        let a = codec().make_digest("value", None);
        let b = codec().make_digest("value", None);
        assert_ne!(a, b);

        let salt = a.rsplit(FIELD_SEPARATOR).next().unwrap();
        assert_eq!(salt.len(), SALT_BYTES * 2);
    }

    #[test]
    fn test_verify_accepts_own_digest() {
        let codec = codec();
        for value in ["", "bob", "pw123", "with|pipes|inside", "ユーザー", " spaced out "] {
            let packed = codec.make_digest(value, None);
            assert!(codec.verify(value, &packed), "value {value:?}");
        }
    }

    #[test]
    fn test_verify_rejects_other_value() {
        let codec = codec();
        let packed = codec.make_digest("alice", None);
        assert!(!codec.verify("alicf", &packed));
        assert!(!codec.verify("", &packed));
        assert!(!codec.verify("alice ", &packed));
    }

    #[test]
    fn test_verify_rejects_other_key() {
        let packed = codec().make_digest("alice", None);
        assert!(!HashCodec::new([8u8; 32]).verify("alice", &packed));
    }

    #[test]
    fn test_verify_malformed_is_invalid() {
        let codec = codec();
        assert!(!codec.verify("x", ""));
        assert!(!codec.verify("x", "x"));
        assert!(!codec.verify("x", "x|abcd"));
        assert!(!codec.verify("x", "x|not-hex|salt"));
        assert!(!codec.verify("x", "x||salt"));
    }

    #[test]
    fn test_verify_rejects_uppercased_digest() {
        let codec = codec();
        let digest = codec.digest("alice", "salt");
        assert!(codec.verify("alice", &format!("alice|{digest}|salt")));

        let upper = format!("alice|{}|salt", digest.to_ascii_uppercase());
        assert_ne!(upper, format!("alice|{digest}|salt"));
        assert!(!codec.verify("alice", &upper));
    }

    #[test]
    fn test_verify_rejects_foreign_value_field() {
        let codec = codec();
        let packed = codec.make_digest("alice", None);
        let (_, rest) = packed.split_once(FIELD_SEPARATOR).unwrap();
        assert!(!codec.verify("alice", &format!("alice|junk|{rest}")));
        assert!(!codec.verify("alice", &format!("bob|{rest}")));
        // The blind form stays valid
        assert!(codec.verify("alice", &format!("|{rest}")));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }

    #[test]
    fn test_blind_digest_hides_value() {
        let codec = codec();
        let packed = codec.make_blind_digest("hunter2", None);
        assert!(!packed.contains("hunter2"));
        assert!(packed.starts_with(FIELD_SEPARATOR));
        assert!(codec.verify("hunter2", &packed));
        assert!(!codec.verify("hunter3", &packed));
    }

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_debug_redacts_key() {
        let output = format!("{:?}", codec());
        assert!(output.contains("REDACTED"));
    }
}
