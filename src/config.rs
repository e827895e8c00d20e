//! Persisted device configuration
//!
//! The configuration is stored as one fixed-size blob: an 8-byte magic
//! sentinel followed by the `postcard` encoding of [`Config`]. A blob whose
//! sentinel does not match was never written (or was wiped) and yields the
//! defaults.

use derive_more::{Display, Error};
use heapless::String;
use serde::{Deserialize, Serialize};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Longest strip the firmware drives
pub const MAX_LEDS: usize = 128;

pub const NAME_MAX_LEN: usize = 31;
pub const SSID_MAX_LEN: usize = 63;
pub const PASSPHRASE_MAX_LEN: usize = 63;

pub const DEFAULT_NAME: &str = "ohm-led";
pub const DEFAULT_HTTP_PORT: u16 = 80;
pub const DEFAULT_NUM_LEDS: u16 = 16;
pub const DEFAULT_FPS: u32 = 120;

/// Sentinel marking a blob written by [`Config::save`]
pub const MAGIC_VALUE: u64 = 0x0BAD_A551;
const MAGIC_LEN: usize = 8;

/// Size of the persisted blob
pub const CONFIG_BLOB_SIZE: usize = 256;

/// Key-value blob storage holding the configuration (EEPROM, flash sector, ...)
pub trait BlobStore {
    type Error: core::fmt::Debug;

    /// Fill `buf` from the start of the blob
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Replace the blob with `data` and commit it
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[display("Name is required.")]
    MissingName,
    #[display("Name is too big.")]
    NameTooLong,
    #[display("SSID is too big.")]
    SsidTooLong,
    #[display("Passphrase is too big.")]
    PassphraseTooLong,
    #[display("Invalid number of LEDs.")]
    InvalidLedCount,
    #[display("Failed to save configuration.")]
    Storage,
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A valid stored blob
    Stored,
    /// Nothing valid was stored; defaults are in effect
    Defaults,
}

/// Fields submitted through the configuration form
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigForm<'a> {
    pub name: &'a str,
    pub ssid: &'a str,
    pub passphrase: &'a str,
    pub num_leds: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub name: String<NAME_MAX_LEN>,
    pub ssid: String<SSID_MAX_LEN>,
    pub passphrase: String<PASSPHRASE_MAX_LEN>,
    pub http_port: u16,
    pub num_leds: u16,
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        let mut name = String::new();
        // DEFAULT_NAME is shorter than NAME_MAX_LEN
        let _ = name.push_str(DEFAULT_NAME);
        Self {
            name,
            ssid: String::new(),
            passphrase: String::new(),
            http_port: DEFAULT_HTTP_PORT,
            num_leds: DEFAULT_NUM_LEDS,
            fps: DEFAULT_FPS,
        }
    }
}

impl Config {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn has_ssid(&self) -> bool {
        !self.ssid.is_empty()
    }

    /// Load from the store, falling back to defaults for anything missing or invalid
    pub fn load<S: BlobStore>(store: &mut S) -> (Self, LoadOutcome) {
        let mut blob = [0u8; CONFIG_BLOB_SIZE];
        let stored = store
            .read(&mut blob)
            .ok()
            .and_then(|()| Self::decode(&blob));

        let (mut config, outcome) = match stored {
            Some(config) => (config, LoadOutcome::Stored),
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[Config] no valid configuration stored, using defaults");
                (Self::default(), LoadOutcome::Defaults)
            }
        };
        config.normalize();
        (config, outcome)
    }

    /// Persist with the magic sentinel
    pub fn save<S: BlobStore>(&self, store: &mut S) -> Result<(), ConfigError> {
        let blob = self.encode()?;
        store.write(&blob).map_err(|_err| {
            #[cfg(feature = "esp32-log")]
            println!("[Config] failed to save configuration: {:?}", _err);
            ConfigError::Storage
        })?;
        #[cfg(feature = "esp32-log")]
        println!("[Config] saved configuration for '{}'", self.name.as_str());
        Ok(())
    }

    /// Wipe the stored blob so the next load yields defaults
    pub fn clear<S: BlobStore>(store: &mut S) -> Result<(), ConfigError> {
        store
            .write(&[0u8; CONFIG_BLOB_SIZE])
            .map_err(|_| ConfigError::Storage)
    }

    /// Validate a submitted form and copy it in
    ///
    /// Nothing is changed unless every field is valid. `http_port` and `fps`
    /// are not part of the form and keep their values.
    pub fn apply_form(&mut self, form: &ConfigForm<'_>) -> Result<(), ConfigError> {
        let name: String<NAME_MAX_LEN> =
            String::try_from(form.name).map_err(|()| ConfigError::NameTooLong)?;
        let ssid: String<SSID_MAX_LEN> =
            String::try_from(form.ssid).map_err(|()| ConfigError::SsidTooLong)?;
        let passphrase: String<PASSPHRASE_MAX_LEN> =
            String::try_from(form.passphrase).map_err(|()| ConfigError::PassphraseTooLong)?;
        if name.is_empty() {
            return Err(ConfigError::MissingName);
        }
        let num_leds = parse_led_count(form.num_leds)?;

        self.name = name;
        self.ssid = ssid;
        self.passphrase = passphrase;
        self.num_leds = num_leds;
        Ok(())
    }

    fn encode(&self) -> Result<[u8; CONFIG_BLOB_SIZE], ConfigError> {
        let mut blob = [0u8; CONFIG_BLOB_SIZE];
        let (magic, payload) = blob.split_at_mut(MAGIC_LEN);
        magic.copy_from_slice(&MAGIC_VALUE.to_le_bytes());
        postcard::to_slice(self, payload).map_err(|_| ConfigError::Storage)?;
        Ok(blob)
    }

    fn decode(blob: &[u8]) -> Option<Self> {
        let (magic, payload) = blob.split_at_checked(MAGIC_LEN)?;
        let magic = u64::from_le_bytes(magic.try_into().ok()?);
        if magic != MAGIC_VALUE {
            return None;
        }
        postcard::from_bytes(payload).ok()
    }

    fn normalize(&mut self) {
        if self.num_leds == 0 || usize::from(self.num_leds) > MAX_LEDS {
            self.num_leds = DEFAULT_NUM_LEDS;
        }
        if self.http_port == 0 {
            self.http_port = DEFAULT_HTTP_PORT;
        }
        if self.fps == 0 {
            self.fps = DEFAULT_FPS;
        }
    }
}

/// Parse a strip length in `1..=MAX_LEDS`
fn parse_led_count(raw: &str) -> Result<u16, ConfigError> {
    let count: u16 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLedCount)?;
    if count == 0 || usize::from(count) > MAX_LEDS {
        return Err(ConfigError::InvalidLedCount);
    }
    Ok(count)
}
