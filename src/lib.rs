//! Compile-time network configuration for the Zugentlastung scale node.
//!
//! Values come from `cfg.toml` (or `cfg.toml.example` when it is missing)
//! plus `ZUGENTLASTUNG_*` environment overrides, are checked by the build
//! script and end up in [`CONFIG`].
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod secret;
pub mod validate;

pub use config::{
    Config, WifiCredentials, CONFIG, MQTT_PASS, MQTT_PORT, MQTT_SERVER, MQTT_TOPIC, MQTT_USER,
    WIFI_PASS, WIFI_SSID,
};
pub use secret::Secret;
pub use validate::{Error, Host};
