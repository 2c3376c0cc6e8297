//! RSA key provisioning for RS256 signing and verification

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{DecodingKey, EncodingKey};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::info;

use crate::errors::{DomainError, TokenError};

/// File name of the persisted private key inside the storage directory
const PRIVATE_KEY_FILE: &str = "private.pem";
/// File name of the persisted public key inside the storage directory
const PUBLIC_KEY_FILE: &str = "public.pem";
/// RSA modulus size in bits
const RSA_KEY_BITS: usize = 2048;

/// A freshly generated RSA key pair, PEM encoded
///
/// The private half is PKCS#8, the public half SPKI. The private key never
/// leaves this process except through [`RsaKeyManager::initialize`] writing
/// it to the storage directory.
#[derive(Clone)]
pub struct KeyPair {
    /// PKCS#8 PEM private key
    pub private_key_pem: String,
    /// SPKI PEM public key
    pub public_key_pem: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key_pem", &"<redacted>")
            .field("public_key_pem", &self.public_key_pem)
            .finish()
    }
}

impl KeyPair {
    /// Generates a new 2048-bit RSA key pair
    pub fn generate() -> Result<Self, DomainError> {
        let mut rng = rand::thread_rng();

        let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS).map_err(|e| {
            DomainError::Token(TokenError::KeyStorage {
                reason: format!("RSA key generation failed: {}", e),
            })
        })?;

        let private_key_pem = private_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| {
                DomainError::Token(TokenError::KeyStorage {
                    reason: format!("Failed to encode private key: {}", e),
                })
            })?
            .to_string();

        let public_key_pem = RsaPublicKey::from(&private_key)
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| {
                DomainError::Token(TokenError::KeyStorage {
                    reason: format!("Failed to encode public key: {}", e),
                })
            })?;

        Ok(Self {
            private_key_pem,
            public_key_pem,
        })
    }
}

/// Manager for the RSA keys used in JWT operations
///
/// Holds the signing and verification keys for the lifetime of the process.
/// Keys are provisioned once at startup through [`RsaKeyManager::initialize`]
/// and shared from there; nothing re-reads the storage directory afterwards.
#[derive(Clone)]
pub struct RsaKeyManager {
    /// Private key for signing JWTs
    encoding_key: EncodingKey,
    /// Public key for verifying JWTs
    decoding_key: DecodingKey,
    /// Public key PEM served to clients for offline verification
    public_key_pem: String,
    /// Directory the pair was loaded from, `None` for in-memory keys
    storage_dir: Option<PathBuf>,
}

impl std::fmt::Debug for RsaKeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaKeyManager")
            .field("storage_dir", &self.storage_dir)
            .finish()
    }
}

impl RsaKeyManager {
    /// Loads the key pair from the storage directory, generating and
    /// persisting a fresh pair if the directory holds none yet.
    ///
    /// Finding only one half of the pair on disk is an error: signing with
    /// a key that does not match the published public key would produce
    /// tokens nobody can verify, so the mismatch surfaces at startup
    /// instead.
    ///
    /// # Arguments
    ///
    /// * `storage_dir` - Directory holding `private.pem` and `public.pem`
    ///
    /// # Returns
    ///
    /// * `Ok(RsaKeyManager)` - Keys loaded or generated successfully
    /// * `Err(DomainError)` - Half a pair on disk, unreadable files, or
    ///   key generation failed
    pub fn initialize<D: AsRef<Path>>(storage_dir: D) -> Result<Self, DomainError> {
        let storage_dir = storage_dir.as_ref();
        let private_key_path = storage_dir.join(PRIVATE_KEY_FILE);
        let public_key_path = storage_dir.join(PUBLIC_KEY_FILE);

        match (private_key_path.exists(), public_key_path.exists()) {
            (true, true) => Self::load_pair(storage_dir, &private_key_path, &public_key_path),
            (false, false) => {
                let pair = KeyPair::generate()?;
                Self::persist_pair(storage_dir, &pair)?;
                info!(
                    storage_dir = %storage_dir.display(),
                    "Generated new RSA key pair"
                );
                Self::build(
                    pair.private_key_pem.as_bytes(),
                    &pair.public_key_pem,
                    Some(storage_dir.to_path_buf()),
                )
            }
            _ => Err(DomainError::Token(TokenError::KeyStorage {
                reason: format!(
                    "Incomplete key pair in {}: found one of {}/{}, need both or neither",
                    storage_dir.display(),
                    PRIVATE_KEY_FILE,
                    PUBLIC_KEY_FILE
                ),
            })),
        }
    }

    /// Creates a key manager from PEM strings (useful for testing or embedded keys)
    ///
    /// # Arguments
    ///
    /// * `private_key_pem` - PEM-encoded private key string
    /// * `public_key_pem` - PEM-encoded public key string
    ///
    /// # Returns
    ///
    /// * `Ok(RsaKeyManager)` - Key manager initialized successfully
    /// * `Err(DomainError)` - Invalid key format
    pub fn from_pem_strings(
        private_key_pem: &str,
        public_key_pem: &str,
    ) -> Result<Self, DomainError> {
        Self::build(private_key_pem.as_bytes(), public_key_pem, None)
    }

    fn load_pair(
        storage_dir: &Path,
        private_key_path: &Path,
        public_key_path: &Path,
    ) -> Result<Self, DomainError> {
        let private_key_pem = fs::read(private_key_path).map_err(|e| {
            DomainError::Token(TokenError::KeyStorage {
                reason: format!("Failed to read private key: {}", e),
            })
        })?;

        let public_key_pem = fs::read_to_string(public_key_path).map_err(|e| {
            DomainError::Token(TokenError::KeyStorage {
                reason: format!("Failed to read public key: {}", e),
            })
        })?;

        info!(
            storage_dir = %storage_dir.display(),
            "Loaded existing RSA key pair"
        );

        Self::build(
            &private_key_pem,
            &public_key_pem,
            Some(storage_dir.to_path_buf()),
        )
    }

    fn persist_pair(storage_dir: &Path, pair: &KeyPair) -> Result<(), DomainError> {
        fs::create_dir_all(storage_dir).map_err(|e| {
            DomainError::Token(TokenError::KeyStorage {
                reason: format!(
                    "Failed to create key storage directory {}: {}",
                    storage_dir.display(),
                    e
                ),
            })
        })?;

        fs::write(storage_dir.join(PRIVATE_KEY_FILE), &pair.private_key_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyStorage {
                reason: format!("Failed to write private key: {}", e),
            })
        })?;

        fs::write(storage_dir.join(PUBLIC_KEY_FILE), &pair.public_key_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyStorage {
                reason: format!("Failed to write public key: {}", e),
            })
        })?;

        Ok(())
    }

    fn build(
        private_key_pem: &[u8],
        public_key_pem: &str,
        storage_dir: Option<PathBuf>,
    ) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyStorage {
                reason: format!("Invalid private key format: {}", e),
            })
        })?;

        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            DomainError::Token(TokenError::KeyStorage {
                reason: format!("Invalid public key format: {}", e),
            })
        })?;

        Ok(Self {
            encoding_key,
            decoding_key,
            public_key_pem: public_key_pem.to_string(),
            storage_dir,
        })
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Returns the public key PEM for distribution to verifiers
    pub fn public_key_pem(&self) -> &str {
        &self.public_key_pem
    }
}
