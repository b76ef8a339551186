//! Command module structure for the bomcheck CLI

pub mod check;
