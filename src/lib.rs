#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod credentials;
pub mod error;

pub use credentials::{ClientCredentials, WifiCredentials};
pub use error::CredentialsError;
