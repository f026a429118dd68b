#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenegotiationPolicy {
    #[default]
    Never,
    OnceAsClient,
}
