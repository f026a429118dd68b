/// Port the redirect handler points clients at.
pub mod redirect_target;
