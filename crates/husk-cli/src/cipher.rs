//! Sealed-blob decryption capability.

use async_trait::async_trait;
use husk_core::{Cipher, DecryptError};
use husk_crypto::{Chain, SealError, SealedBlob, open, parse_private_key};

/// Decryption capability for one chain's sealed blobs.
///
/// Layer ciphertexts are hex-encoded sealed blobs; private keys are
/// hex-encoded X25519 scalars. The selected chain feeds domain separation,
/// so blobs from a different chain's backup are rejected at the
/// authentication tag.
#[derive(Debug, Clone, Copy)]
pub struct ChainCipher {
    chain: Chain,
}

impl ChainCipher {
    /// Capability for the given chain.
    pub fn new(chain: Chain) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl Cipher for ChainCipher {
    async fn decrypt(&self, ciphertext: &str, private_key: &str) -> Result<String, DecryptError> {
        let secret = parse_private_key(private_key).map_err(reject)?;
        let blob = SealedBlob::decode(ciphertext).map_err(reject)?;
        let plaintext = open(&blob, &secret, self.chain).map_err(reject)?;

        String::from_utf8(plaintext)
            .map_err(|_| DecryptError::Failed { reason: "plaintext is not valid UTF-8".to_string() })
    }
}

fn reject(err: SealError) -> DecryptError {
    DecryptError::Failed { reason: err.to_string() }
}
