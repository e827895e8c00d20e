//! Configuration page markup.

use core::fmt::{self, Write};

use crate::config::{Config, MAX_LEDS};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <title>Ohm-Led configuration</title>
        <style type="text/css">
            html { font-family: sans-serif; }
            form > div { margin: 1em 0; }
            form > div > input { border: 1px solid silver; }
        </style>
    </head>
    <body>
        <h1>Ohm-Led configuration</h1>
        <p>Use this page to configure your Ohm-Led device.</p>
        <form action="/configuration/" method="post">
"#;

const TAIL: &str = r#"            <div>
                <input type="submit" value="Apply configuration">
            </div>
        </form>
    </body>
</html>
"#;

/// Render the form pre-filled with the current name, SSID and strip length.
/// The passphrase is never echoed back.
pub fn write_configuration_page<W: Write>(out: &mut W, config: &Config) -> fmt::Result {
    out.write_str(HEAD)?;
    write!(
        out,
        r#"            <div>
                <label for="name">Name: </label>
                <input type="text" name="name" id="name" value="{}" required>
            </div>
            <div>
                <label for="ssid">SSID: </label>
                <input type="text" name="ssid" id="ssid" value="{}" required>
            </div>
            <div>
                <label for="passphrase">Passphrase: </label>
                <input type="password" name="passphrase" id="passphrase" required>
            </div>
            <div>
                <label for="num_leds">Number of LEDs: </label>
                <input type="number" name="num_leds" id="num_leds" min="1" max="{}" value="{}" required>
            </div>
"#,
        Escaped(&config.name),
        Escaped(&config.ssid),
        MAX_LEDS,
        config.num_leds,
    )?;
    out.write_str(TAIL)
}

/// HTML attribute escaping
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
