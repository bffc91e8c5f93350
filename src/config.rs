use crate::credentials::WifiCredentials;

// Wifi constants
//
// Override the placeholders by setting SSID/PASSWORD in the build
// environment, or edit the literals before building.
pub const WIFI_SSID: &str = match option_env!("SSID") {
    Some(ssid) => ssid,
    None => "YourSSID",
};
pub const WIFI_PASSWORD: &str = match option_env!("PASSWORD") {
    Some(password) => password,
    None => "YourPassword",
};

/// The provisioned credential pair as a single value, for consumers that
/// take their configuration explicitly instead of reading the constants.
pub const fn wifi_credentials() -> WifiCredentials {
    WifiCredentials::new(WIFI_SSID, WIFI_PASSWORD)
}
