//! Stream subsystem state: the live handle table and the persistent pool.

pub mod pool;
pub mod table;
