// src/db/mod.rs
pub mod ledger_db_conn;
pub mod ledger_db_ops;

pub use ledger_db_conn::{open_in_memory_ledger_db, open_ledger_db};
pub use ledger_db_ops::{SqliteState, StateEntry, StateVersion};
