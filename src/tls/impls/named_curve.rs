use std::fmt;
use rustls::NamedGroup;
use crate::tls::enums::named_curve::NamedCurve;

impl NamedCurve {
    pub fn named_group(&self) -> NamedGroup {
        match self {
            NamedCurve::P256 => NamedGroup::secp256r1,
            NamedCurve::P384 => NamedGroup::secp384r1,
            NamedCurve::P521 => NamedGroup::secp521r1,
            NamedCurve::X25519 => NamedGroup::X25519,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamedCurve::P256 => "P256",
            NamedCurve::P384 => "P384",
            NamedCurve::P521 => "P521",
            NamedCurve::X25519 => "X25519",
        }
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
