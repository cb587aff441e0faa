//! Scripts for deploying & configuring the Roadmap collections, their catalog
//! and the RMRK utility contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
mod commands;
pub mod configure;
pub mod constants;
pub mod deploy;
pub mod errors;
pub mod plan;
mod solidity;
pub mod types;
pub mod utils;
pub mod verify;
