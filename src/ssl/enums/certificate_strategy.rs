#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateStrategy {
    Manual,
    SelfSigned,
    Acme,
}
