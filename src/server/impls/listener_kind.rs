use std::fmt;
use crate::server::enums::listener_kind::ListenerKind;

impl ListenerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListenerKind::Plain => "plain",
            ListenerKind::Encrypted => "encrypted",
            ListenerKind::Challenge => "challenge",
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
