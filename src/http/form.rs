//! `application/x-www-form-urlencoded` decoding for the configuration form.

use derive_more::{Display, Error};
use heapless::{String, Vec};

use crate::config::{ConfigError, ConfigForm};

/// Decoded capacity of one form field. Larger than every config field so
/// oversized input is still seen, and rejected, by the config validation.
pub const FIELD_CAPACITY: usize = 96;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[display("{_0}")]
    Field(#[error(not(source))] ConfigError),
    #[display("Invalid form data.")]
    Encoding,
}

/// Owned, decoded copy of the configuration form fields.
#[derive(Debug, Default)]
pub struct DecodedForm {
    name: String<FIELD_CAPACITY>,
    ssid: String<FIELD_CAPACITY>,
    passphrase: String<FIELD_CAPACITY>,
    num_leds: String<FIELD_CAPACITY>,
}

impl DecodedForm {
    /// Decode a form body. Unknown keys are ignored, repeated keys keep the last value.
    pub fn parse(body: &[u8]) -> Result<Self, FormError> {
        let mut form = Self::default();

        for pair in body.split(|b| *b == b'&').filter(|pair| !pair.is_empty()) {
            let (key, value) = match pair.iter().position(|b| *b == b'=') {
                Some(split) => (&pair[..split], &pair[split + 1..]),
                None => (pair, &[][..]),
            };

            let (slot, overflow) = match key {
                b"name" => (&mut form.name, ConfigError::NameTooLong),
                b"ssid" => (&mut form.ssid, ConfigError::SsidTooLong),
                b"passphrase" => (&mut form.passphrase, ConfigError::PassphraseTooLong),
                b"num_leds" => (&mut form.num_leds, ConfigError::InvalidLedCount),
                _ => continue,
            };

            *slot = decode_component(value).map_err(|err| match err {
                DecodeError::Overflow => FormError::Field(overflow),
                DecodeError::Utf8 => FormError::Encoding,
            })?;
        }

        Ok(form)
    }

    pub fn as_config_form(&self) -> ConfigForm<'_> {
        ConfigForm {
            name: &self.name,
            ssid: &self.ssid,
            passphrase: &self.passphrase,
            num_leds: &self.num_leds,
        }
    }
}

enum DecodeError {
    Overflow,
    Utf8,
}

/// Percent-decode one component; `+` stands for a space.
///
/// A `%` not followed by two hex digits is kept literally.
fn decode_component(raw: &[u8]) -> Result<String<FIELD_CAPACITY>, DecodeError> {
    let mut bytes: Vec<u8, FIELD_CAPACITY> = Vec::new();
    let mut i = 0;

    while i < raw.len() {
        let byte = match raw[i] {
            b'+' => b' ',
            b'%' => match (raw.get(i + 1).and_then(hex_value), raw.get(i + 2).and_then(hex_value)) {
                (Some(hi), Some(lo)) => {
                    i += 2;
                    (hi << 4) | lo
                }
                _ => b'%',
            },
            other => other,
        };
        bytes.push(byte).map_err(|_| DecodeError::Overflow)?;
        i += 1;
    }

    String::from_utf8(bytes).map_err(|_| DecodeError::Utf8)
}

fn hex_value(digit: &u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
