use core::fmt;

use heapless::String;
use log::error;

use crate::error::CredentialsError;

/// 802.11 SSID field size in bytes.
pub const SSID_MAX_LEN: usize = 32;
/// Radio passphrase field size in bytes.
pub const PASSWORD_MAX_LEN: usize = 64;

/// An immutable wireless credential pair, fixed at build time.
///
/// Plain data for a connection routine to consume. No validation is done
/// here; whether a value makes a joinable network is the radio's business.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials {
    ssid: &'static str,
    password: &'static str,
}

impl WifiCredentials {
    pub const fn new(ssid: &'static str, password: &'static str) -> Self {
        Self { ssid, password }
    }

    pub const fn ssid(&self) -> &'static str {
        self.ssid
    }

    pub const fn password(&self) -> &'static str {
        self.password
    }

    /// An empty password means an open network.
    pub const fn is_open(&self) -> bool {
        self.password.is_empty()
    }

    /// Copy the pair into the fixed-capacity form a radio driver programs.
    ///
    /// Fails if either value exceeds its radio field. This is the only
    /// fallible path in the crate.
    pub fn client_config(&self) -> Result<ClientCredentials, CredentialsError> {
        let mut ssid: String<SSID_MAX_LEN> = String::new();
        if ssid.push_str(self.ssid).is_err() {
            error!(
                "SSID is {} bytes, exceeds the {} byte radio field",
                self.ssid.len(),
                SSID_MAX_LEN
            );
            return Err(CredentialsError::SsidTooLong {
                len: self.ssid.len(),
            });
        }
        let mut password: String<PASSWORD_MAX_LEN> = String::new();
        if password.push_str(self.password).is_err() {
            error!(
                "password is {} bytes, exceeds the {} byte radio field",
                self.password.len(),
                PASSWORD_MAX_LEN
            );
            return Err(CredentialsError::PasswordTooLong {
                len: self.password.len(),
            });
        }
        Ok(ClientCredentials { ssid, password })
    }
}

// Keep the password out of debug logs.
impl fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for WifiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_open() {
            write!(f, "SSID {:?} (open network)", self.ssid)
        } else {
            write!(
                f,
                "SSID {:?} (password: {} bytes)",
                self.ssid,
                self.password.len()
            )
        }
    }
}

/// Credentials copied into the field sizes a WiFi radio accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub ssid: String<SSID_MAX_LEN>,
    pub password: String<PASSWORD_MAX_LEN>,
}
