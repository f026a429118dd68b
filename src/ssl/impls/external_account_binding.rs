use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use instant_acme::ExternalAccountKey;
use crate::ssl::enums::provisioning_error::ProvisioningError;
use crate::ssl::structs::external_account_binding::ExternalAccountBinding;

impl ExternalAccountBinding {
    /// ZeroSSL hands out the HMAC key base64url encoded; anything that does not
    /// decode is used as raw bytes.
    pub fn new(key_id: &str, hmac_key: &str) -> Result<ExternalAccountBinding, ProvisioningError> {
        let key_id = key_id.trim();
        let hmac_key = hmac_key.trim();
        if hmac_key.is_empty() {
            return Err(ProvisioningError::MissingExternalAccountBinding("auto_ssl_zerossl_eab_key"));
        }
        if key_id.is_empty() {
            return Err(ProvisioningError::MissingExternalAccountBinding("auto_ssl_zerossl_kid"));
        }
        let decoded = URL_SAFE_NO_PAD.decode(hmac_key.trim_end_matches('='))
            .unwrap_or_else(|_| hmac_key.as_bytes().to_vec());
        Ok(ExternalAccountBinding {
            key_id: key_id.to_string(),
            hmac_key: decoded,
        })
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn hmac_key(&self) -> &[u8] {
        &self.hmac_key
    }

    pub fn to_acme_key(&self) -> ExternalAccountKey {
        ExternalAccountKey::new(self.key_id.clone(), &self.hmac_key)
    }
}

impl std::fmt::Debug for ExternalAccountBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalAccountBinding")
            .field("key_id", &self.key_id)
            .field("hmac_key", &"<redacted>")
            .finish()
    }
}
