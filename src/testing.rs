//! Shared test helpers.

pub type Result<T = ()> = anyhow::Result<T>;
