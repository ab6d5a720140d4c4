//! CLI command implementations.

pub mod deploy;
pub mod deploy_schema;
pub mod filter;
pub mod init_schema;
pub mod serve;
pub mod validate;
