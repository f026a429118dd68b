use crate::tls::enums::renegotiation_policy::RenegotiationPolicy;

impl From<bool> for RenegotiationPolicy {
    fn from(enabled: bool) -> Self {
        if enabled {
            RenegotiationPolicy::OnceAsClient
        } else {
            RenegotiationPolicy::Never
        }
    }
}
