/// Key id and decoded HMAC key. `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct ExternalAccountBinding {
    pub(crate) key_id: String,
    pub(crate) hmac_key: Vec<u8>,
}
