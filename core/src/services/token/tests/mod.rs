mod signer_verifier_tests;

use std::sync::OnceLock;

use super::{KeyPair, RsaKeyManager};

/// Shared key manager so the suite pays for key generation once
pub(crate) fn test_key_manager() -> &'static RsaKeyManager {
    static MANAGER: OnceLock<RsaKeyManager> = OnceLock::new();
    MANAGER.get_or_init(|| {
        let pair = KeyPair::generate().expect("failed to generate test key pair");
        RsaKeyManager::from_pem_strings(&pair.private_key_pem, &pair.public_key_pem)
            .expect("failed to build test key manager")
    })
}
