/// Current firmware configuration crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default MQTT port (plain TCP, no TLS)
pub const DEFAULT_MQTT_PORT: u16 = 1883;
/// Device ID used when the configuration does not set one
pub const DEFAULT_DEVICE_ID: &str = "zugentlastung";

/// Maximum length of an 802.11 SSID in bytes
pub const SSID_MAX_LEN: usize = 32;
/// Minimum length of a WPA passphrase
pub const PASSPHRASE_MIN_LEN: usize = 8;
/// Maximum length of a WPA passphrase
pub const PASSPHRASE_MAX_LEN: usize = 63;
/// Length of a raw pre-shared key written as hex digits
pub const PSK_HEX_LEN: usize = 64;

/// Maximum DHCP hostname length accepted by the network stack
pub const HOSTNAME_MAX_LEN: usize = 32;
/// Maximum length of a single DNS label
pub const DNS_LABEL_MAX_LEN: usize = 63;
/// Maximum length of a fully qualified DNS name
pub const DNS_NAME_MAX_LEN: usize = 253;

/// Maximum length of an MQTT topic name (two byte length prefix)
pub const TOPIC_MAX_LEN: usize = 65535;
/// Size of the buffer used when deriving sub-topics
pub const TOPIC_BUFFER_SIZE: usize = 128;
