use core::fmt;

const REDACTED: &str = "***";

/// A sensitive configuration value (WiFi passphrase, MQTT password).
///
/// Formatting never shows the value. Call [`Secret::expose`] at the point
/// where a driver actually needs it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Secret(&'static str);

impl Secret {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn expose(&self) -> &'static str {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
