// tests/core/mod.rs

#[cfg(test)]
mod keys;
#[cfg(test)]
mod kv;
#[cfg(test)]
mod listing;
#[cfg(test)]
mod transfer;
