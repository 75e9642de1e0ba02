//! 外部API

pub mod sheets;
