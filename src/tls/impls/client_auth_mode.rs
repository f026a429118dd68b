use std::fmt;
use crate::tls::enums::client_auth_mode::ClientAuthMode;

impl ClientAuthMode {
    /// Modes that validate the client chain against `client_ca_cert`.
    pub fn verifies_chain(&self) -> bool {
        matches!(self, ClientAuthMode::VerifyIfGiven | ClientAuthMode::RequireAndVerify)
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(self, ClientAuthMode::RequireAny | ClientAuthMode::RequireAndVerify)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientAuthMode::None => "none",
            ClientAuthMode::Request => "request",
            ClientAuthMode::RequireAny => "require-any",
            ClientAuthMode::VerifyIfGiven => "verify-if-given",
            ClientAuthMode::RequireAndVerify => "require-and-verify",
        }
    }
}

impl fmt::Display for ClientAuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
