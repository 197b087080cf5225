//! Checks for configuration values.
//!
//! Only depends on `core`, so the build script compiles this same file to
//! reject a bad `cfg.toml` before any firmware is built.

use core::fmt;
use core::net::Ipv4Addr;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    EmptySsid,
    SsidTooLong,
    SsidContainsNul,
    InvalidPassphrase,
    InvalidPort,
    InvalidIpv4,
    InvalidHostname,
    EmptyTopic,
    TopicTooLong,
    TopicContainsNul,
    TopicContainsWildcard,
    ReservedTopic,
    InvalidTopicLevel,
    InvalidDeviceId,
    EmptyUser,
    PasswordWithoutUser,
    CapacityExceeded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            Error::EmptySsid => "wifi_ssid is empty",
            Error::SsidTooLong => "wifi_ssid is longer than 32 bytes",
            Error::SsidContainsNul => "wifi_ssid contains a NUL character",
            Error::InvalidPassphrase => {
                "wifi_pass must be 8-63 printable ASCII characters or 64 hex digits"
            }
            Error::InvalidPort => "mqtt_port must be in 1..=65535",
            Error::InvalidIpv4 => "mqtt_server is not a valid IPv4 address",
            Error::InvalidHostname => "mqtt_server is not a valid hostname",
            Error::EmptyTopic => "mqtt_topic is empty",
            Error::TopicTooLong => "mqtt_topic is longer than 65535 bytes",
            Error::TopicContainsNul => "mqtt_topic contains a NUL character",
            Error::TopicContainsWildcard => "mqtt_topic contains a '+' or '#' wildcard",
            Error::ReservedTopic => "mqtt_topic starts with '$' (reserved for the broker)",
            Error::InvalidTopicLevel => "topic level is empty or contains '/'",
            Error::InvalidDeviceId => "device_id is not a valid hostname label",
            Error::EmptyUser => "mqtt_user is set but empty",
            Error::PasswordWithoutUser => "mqtt_pass is set but mqtt_user is not",
            Error::CapacityExceeded => "value does not fit the target buffer",
        };
        f.write_str(desc)
    }
}

impl core::error::Error for Error {}

/// Broker address, either a literal IPv4 address or a name to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host<'a> {
    Ipv4(Ipv4Addr),
    Name(&'a str),
}

pub fn ssid(ssid: &str) -> Result<(), Error> {
    if ssid.is_empty() {
        return Err(Error::EmptySsid);
    }
    if ssid.len() > SSID_MAX_LEN {
        return Err(Error::SsidTooLong);
    }
    if ssid.contains('\0') {
        return Err(Error::SsidContainsNul);
    }
    Ok(())
}

/// Accepts a WPA passphrase (8..=63 printable ASCII) or a raw PSK as 64 hex digits.
pub fn passphrase(pass: &str) -> Result<(), Error> {
    let len = pass.len();

    if len == PSK_HEX_LEN {
        return if pass.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(())
        } else {
            Err(Error::InvalidPassphrase)
        };
    }

    if !(PASSPHRASE_MIN_LEN..=PASSPHRASE_MAX_LEN).contains(&len) {
        return Err(Error::InvalidPassphrase);
    }

    // 802.11i restricts passphrase characters to ASCII 32..=126
    if pass.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        Ok(())
    } else {
        Err(Error::InvalidPassphrase)
    }
}

pub fn port(port: u16) -> Result<(), Error> {
    if port == 0 {
        Err(Error::InvalidPort)
    } else {
        Ok(())
    }
}

/// Classifies the broker address.
///
/// Anything made of digits and dots only is treated as an IPv4 literal, so
/// `192.168.4.256` is an invalid address rather than a hostname.
pub fn host(host: &str) -> Result<Host<'_>, Error> {
    if host.is_empty() {
        return Err(Error::InvalidHostname);
    }

    if host.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return host.parse::<Ipv4Addr>().map(Host::Ipv4).map_err(|_| Error::InvalidIpv4);
    }

    let name = host.strip_suffix('.').unwrap_or(host);
    if name.is_empty() || name.len() > DNS_NAME_MAX_LEN {
        return Err(Error::InvalidHostname);
    }
    if !name.split('.').all(is_label) {
        return Err(Error::InvalidHostname);
    }

    Ok(Host::Name(host))
}

pub fn topic(topic: &str) -> Result<(), Error> {
    if topic.is_empty() {
        return Err(Error::EmptyTopic);
    }
    if topic.len() > TOPIC_MAX_LEN {
        return Err(Error::TopicTooLong);
    }
    if topic.starts_with('$') {
        return Err(Error::ReservedTopic);
    }
    check_topic_chars(topic)
}

/// Checks a single level appended below the configured topic.
pub fn topic_level(level: &str) -> Result<(), Error> {
    if level.is_empty() || level.contains('/') {
        return Err(Error::InvalidTopicLevel);
    }
    check_topic_chars(level)
}

pub fn device_id(id: &str) -> Result<(), Error> {
    if id.len() > HOSTNAME_MAX_LEN || !is_label(id) {
        return Err(Error::InvalidDeviceId);
    }
    Ok(())
}

/// MQTT 3.1.1 only allows a password together with a user name.
pub fn credentials(user: Option<&str>, pass: Option<&str>) -> Result<(), Error> {
    match (user, pass) {
        (None, Some(_)) => Err(Error::PasswordWithoutUser),
        (Some(""), _) => Err(Error::EmptyUser),
        _ => Ok(()),
    }
}

fn check_topic_chars(s: &str) -> Result<(), Error> {
    for c in s.chars() {
        match c {
            '\0' => return Err(Error::TopicContainsNul),
            '+' | '#' => return Err(Error::TopicContainsWildcard),
            _ => {}
        }
    }
    Ok(())
}

// RFC 1123 label: alphanumerics and hyphens, no hyphen at either end
fn is_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= DNS_LABEL_MAX_LEN
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        && bytes.first() != Some(&b'-')
        && bytes.last() != Some(&b'-')
}
