use std::fmt;
use crate::tls::enums::server_certificate::ServerCertificate;

impl fmt::Debug for ServerCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerCertificate::Single { chain, .. } => f.debug_struct("Single")
                .field("chain_len", &chain.len())
                .finish_non_exhaustive(),
            ServerCertificate::Resolver(_) => f.write_str("Resolver"),
        }
    }
}
