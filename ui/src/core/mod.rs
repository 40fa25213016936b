//! Platform glue and small helpers shared by the session and history modules.

pub mod format;
pub mod platform;
pub mod storage;
pub mod timing;
