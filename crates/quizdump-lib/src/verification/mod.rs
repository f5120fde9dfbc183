pub mod content_digest_hasher;

pub use content_digest_hasher::{ContentDigestVerifier, VerificationError, md5_base64, verify_file};
