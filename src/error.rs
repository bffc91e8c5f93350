use thiserror::Error;

use crate::credentials::{PASSWORD_MAX_LEN, SSID_MAX_LEN};

/// Errors raised when credentials do not fit the radio's fixed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("SSID is {len} bytes, limit is {SSID_MAX_LEN}")]
    SsidTooLong { len: usize },
    #[error("password is {len} bytes, limit is {PASSWORD_MAX_LEN}")]
    PasswordTooLong { len: usize },
}
