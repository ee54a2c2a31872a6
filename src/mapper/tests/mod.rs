
use std::sync::OnceLock;

use super::Mapper;
use crate::writing::DEFAULT_TOML;

/// Mapper over the embedded tables, independent of `Mapper::global()`.
fn mapper() -> &'static Mapper {
    static MAPPER: OnceLock<Mapper> = OnceLock::new();
    MAPPER.get_or_init(|| Mapper::from_toml(DEFAULT_TOML).unwrap())
}

fn map(word: &str) -> String {
    mapper().map(word)
}
