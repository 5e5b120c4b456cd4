//! Vault gate configuration.
//!
//! The vault (history listing) is gated by a shared secret. Only a salted
//! HMAC-SHA256 digest of that secret is ever stored; candidates are checked
//! with the MAC's constant-time comparison. This is a capability gate for a
//! local tool, not an authentication system.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::ConfigError;

type HmacSha256 = Hmac<Sha256>;

fn default_salt() -> String {
    "scout-vault".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VaultConfig {
    /// Hex HMAC-SHA256 of the vault secret keyed by `salt`.
    #[serde(default)]
    pub secret_digest: String,

    /// HMAC key mixed into the digest.
    #[serde(default = "default_salt")]
    pub salt: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            secret_digest: String::new(),
            salt: default_salt(),
        }
    }
}

impl VaultConfig {
    /// Check if a secret digest has been configured.
    pub fn is_configured(&self) -> bool {
        !self.secret_digest.is_empty()
    }

    /// Compute the hex digest to store for `secret` under `salt`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the salt cannot key the MAC.
    pub fn digest(salt: &str, secret: &str) -> Result<String, ConfigError> {
        let mut mac = keyed_mac(salt)?;
        mac.update(secret.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check `candidate` against the configured digest in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if no digest is set, or
    /// [`ConfigError::InvalidValue`] if the stored digest is not valid hex.
    pub fn verify(&self, candidate: &str) -> Result<bool, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "vault".to_string(),
            });
        }
        let expected = hex::decode(self.secret_digest.trim()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "vault.secret_digest".to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut mac = keyed_mac(&self.salt)?;
        mac.update(candidate.as_bytes());
        Ok(mac.verify_slice(&expected).is_ok())
    }
}

fn keyed_mac(salt: &str) -> Result<HmacSha256, ConfigError> {
    HmacSha256::new_from_slice(salt.as_bytes()).map_err(|e| ConfigError::InvalidValue {
        field: "vault.salt".to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(secret: &str) -> VaultConfig {
        let salt = default_salt();
        VaultConfig {
            secret_digest: VaultConfig::digest(&salt, secret).unwrap(),
            salt,
        }
    }

    #[test]
    fn default_is_not_configured() {
        let config = VaultConfig::default();
        assert!(!config.is_configured());
        assert!(matches!(
            config.verify("anything"),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn digest_is_hex_sha256_length() {
        let digest = VaultConfig::digest("salt", "secret").unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(digest, VaultConfig::digest("other-salt", "secret").unwrap());
    }

    #[test]
    fn verify_accepts_matching_secret_only() {
        let config = configured("open sesame");
        assert!(config.verify("open sesame").unwrap());
        assert!(!config.verify("open sesame ").unwrap());
        assert!(!config.verify("").unwrap());
    }

    #[test]
    fn verify_rejects_malformed_digest() {
        let config = VaultConfig {
            secret_digest: "not-hex".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.verify("x"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
