use std::collections::BTreeMap;
use crate::server::enums::listener_kind::ListenerKind;
use crate::server::structs::listener_handle::ListenerHandle;

#[derive(Default)]
pub struct ListenerSet {
    pub(crate) listeners: BTreeMap<ListenerKind, ListenerHandle>,
}
