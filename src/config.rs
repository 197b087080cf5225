use core::str::FromStr;

use heapless::String;

use crate::constants::*;
use crate::secret::Secret;
use crate::validate::{self, Error, Host};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi passphrase (WPA)
    pub wifi_pass: Secret,

    // MQTT broker IPv4 address or hostname
    pub mqtt_server: &'static str,

    // MQTT port (1883 unless the broker says otherwise)
    pub mqtt_port: u16,

    // MQTT topic the scale readings are published to
    pub mqtt_topic: &'static str,

    // MQTT username, None when the broker allows anonymous clients
    pub mqtt_user: Option<&'static str>,

    // MQTT password, only sent together with a username
    pub mqtt_pass: Option<Secret>,

    // Device ID (used as DHCP hostname and MQTT client id)
    pub device_id: &'static str,
}

/// WiFi credentials sized for the station configuration of the radio driver.
pub struct WifiCredentials {
    pub ssid: String<SSID_MAX_LEN>,
    pub password: String<PSK_HEX_LEN>,
}

impl core::fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        validate::ssid(self.wifi_ssid)?;
        validate::passphrase(self.wifi_pass.expose())?;
        validate::host(self.mqtt_server)?;
        validate::port(self.mqtt_port)?;
        validate::topic(self.mqtt_topic)?;
        validate::credentials(self.mqtt_user, self.mqtt_pass.map(|p| p.expose()))?;
        validate::device_id(self.device_id)?;
        Ok(())
    }

    /// Broker address. An IPv4 literal lets the caller skip the DNS query.
    pub fn broker(&self) -> Result<Host<'static>, Error> {
        validate::host(self.mqtt_server)
    }

    pub fn wifi_credentials(&self) -> Result<WifiCredentials, Error> {
        validate::ssid(self.wifi_ssid)?;
        validate::passphrase(self.wifi_pass.expose())?;

        Ok(WifiCredentials {
            ssid: String::from_str(self.wifi_ssid).map_err(|_| Error::CapacityExceeded)?,
            password: String::from_str(self.wifi_pass.expose())
                .map_err(|_| Error::CapacityExceeded)?,
        })
    }

    pub fn hostname(&self) -> Result<String<HOSTNAME_MAX_LEN>, Error> {
        validate::device_id(self.device_id)?;
        String::from_str(self.device_id).map_err(|_| Error::CapacityExceeded)
    }

    /// Appends one level to the configured topic, e.g. `status` gives
    /// `factory/scale/zugentlastung/status`.
    pub fn subtopic(&self, level: &str) -> Result<String<TOPIC_BUFFER_SIZE>, Error> {
        validate::topic(self.mqtt_topic)?;
        validate::topic_level(level)?;

        let mut topic: String<TOPIC_BUFFER_SIZE> = String::new();
        topic
            .push_str(self.mqtt_topic.trim_end_matches('/'))
            .map_err(|_| Error::CapacityExceeded)?;
        topic.push('/').map_err(|_| Error::CapacityExceeded)?;
        topic.push_str(level).map_err(|_| Error::CapacityExceeded)?;
        Ok(topic)
    }

    pub fn log_summary(&self) {
        log::info!("Configuration v{} for device {}", VERSION, self.device_id);
        log::info!(
            "Wi-Fi SSID: {:?}, passphrase: {}",
            self.wifi_ssid,
            self.wifi_pass
        );
        log::info!(
            "MQTT broker: {}:{}, topic: {}",
            self.mqtt_server,
            self.mqtt_port,
            self.mqtt_topic
        );
        match (self.mqtt_user, self.mqtt_pass) {
            (Some(user), pass) => log::info!("MQTT user: {}, password: {:?}", user, pass),
            (None, _) => log::info!("MQTT authentication disabled (anonymous)"),
        }
        if let Err(e) = self.validate() {
            log::warn!("Configuration is invalid: {}", e);
        }
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

pub const WIFI_SSID: &str = CONFIG.wifi_ssid;
pub const WIFI_PASS: Secret = CONFIG.wifi_pass;
pub const MQTT_SERVER: &str = CONFIG.mqtt_server;
pub const MQTT_PORT: u16 = CONFIG.mqtt_port;
pub const MQTT_TOPIC: &str = CONFIG.mqtt_topic;
pub const MQTT_USER: Option<&str> = CONFIG.mqtt_user;
pub const MQTT_PASS: Option<Secret> = CONFIG.mqtt_pass;
