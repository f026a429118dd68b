use async_trait::async_trait;
use crate::ssl::enums::provisioning_error::ProvisioningError;

#[async_trait]
pub trait CertificateRenewal: Send + Sync {
    /// Renews what is due and returns how many certificates were issued.
    async fn renew_if_needed(&self) -> Result<usize, ProvisioningError>;
}
