use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use digest::Digest;
use md5::Md5;
use std::path::Path;
use thiserror::Error;
use tokio::io::AsyncReadExt;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Verification failed: expected {expected}, got {actual}")]
    VerificationFailed { expected: String, actual: String },
}

/// Incrementally hashes media content and checks it against a base64 MD5 digest.
pub struct ContentDigestVerifier {
    hasher: Md5,
    expected_digest: String,
}

impl ContentDigestVerifier {
    #[inline]
    pub fn new(expected_digest: impl Into<String>) -> Self {
        Self {
            hasher: Md5::new(),
            expected_digest: expected_digest.into(),
        }
    }

    #[inline]
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        Digest::update(&mut self.hasher, data.as_ref());
    }

    pub fn verify(self) -> Result<(), VerificationError> {
        let actual_digest = STANDARD.encode(self.hasher.finalize());

        if actual_digest == self.expected_digest {
            Ok(())
        } else {
            Err(VerificationError::VerificationFailed {
                expected: self.expected_digest,
                actual: actual_digest,
            })
        }
    }
}

pub fn md5_base64(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(Md5::digest(data.as_ref()))
}

/// Streams an existing file through the verifier without loading it into memory.
pub async fn verify_file(path: &Path, expected_digest: &str) -> std::io::Result<bool> {
    let file = tokio::fs::File::open(path).await?;
    let mut reader = tokio::io::BufReader::new(file);
    let mut buffer = vec![0u8; 65536];
    let mut verifier = ContentDigestVerifier::new(expected_digest);

    loop {
        let bytes_read = reader.read(&mut buffer).await?;
        if bytes_read == 0 {
            break;
        }
        verifier.update(&buffer[..bytes_read]);
    }

    Ok(verifier.verify().is_ok())
}
