pub(super) const PRO_TOML: &str = include_str!("pro.toml");
pub(super) const STANDARD_TOML: &str = include_str!("standard.toml");
