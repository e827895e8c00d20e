//! HTTP request/response contract.
//!
//! The platform owns the socket and the HTTP parser. It hands each request to
//! [`handle`] as a [`Request`] and writes the returned [`Response`] back. All
//! bodies are built in fixed-capacity buffers.
//!
//! Routes:
//!
//! | Method        | Path               | Action                               |
//! |---------------|--------------------|--------------------------------------|
//! | `GET`         | `/`                | redirect to `/configuration/`        |
//! | `GET`         | `/configuration/`  | configuration form                   |
//! | `POST`, `PUT` | `/configuration/`  | validate, save, schedule a restart   |
//! | `GET`         | `/v1/info/`        | device name, strip length and fps    |
//! | `GET`         | `/v1/state/`       | state snapshot                       |
//! | `PUT`         | `/v1/state/`       | partial state update                 |

mod form;
mod page;

use core::fmt::{Display, Write};

use embassy_time::{Duration, Instant};
use heapless::String;
use serde::Serialize;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use form::{DecodedForm, FIELD_CAPACITY, FormError};
pub use page::write_configuration_page;

use crate::config::{BlobStore, Config, ConfigError};
use crate::state::{State, StateUpdate, UpdateError};
use crate::system::{SystemQueue, SystemRequest};

/// Capacity of a response body
pub const RESPONSE_CAPACITY: usize = 3072;

/// Delay between a saved configuration and the restart that applies it
pub const RESTART_DELAY: Duration = Duration::from_millis(1000);

pub const CONFIGURATION_PATH: &str = "/configuration/";

pub const CONTENT_TYPE_TEXT: &str = "text/plain";
pub const CONTENT_TYPE_HTML: &str = "text/html";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Other,
}

/// An incoming request, borrowed from the platform's buffers
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub method: Method,
    /// Request target; anything after `?` is ignored
    pub path: &'a str,
    pub content_type: Option<&'a str>,
    pub body: Option<&'a [u8]>,
}

impl<'a> Request<'a> {
    pub const fn get(path: &'a str) -> Self {
        Self {
            method: Method::Get,
            path,
            content_type: None,
            body: None,
        }
    }

    pub const fn put(path: &'a str, content_type: &'a str, body: &'a [u8]) -> Self {
        Self {
            method: Method::Put,
            path,
            content_type: Some(content_type),
            body: Some(body),
        }
    }

    pub const fn post(path: &'a str, content_type: &'a str, body: &'a [u8]) -> Self {
        Self {
            method: Method::Post,
            path,
            content_type: Some(content_type),
            body: Some(body),
        }
    }

    fn route(&self) -> &'a str {
        self.path.split('?').next().unwrap_or(self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    /// `Location` header for redirects
    pub location: Option<&'static str>,
    pub body: String<RESPONSE_CAPACITY>,
}

impl Response {
    /// Plaintext body followed by a newline
    pub fn text(status: u16, message: impl Display) -> Self {
        let mut body = String::new();
        if writeln!(body, "{message}").is_err() {
            return Self::internal_error();
        }
        Self {
            status,
            content_type: CONTENT_TYPE_TEXT,
            location: None,
            body,
        }
    }

    /// Compact JSON body followed by a newline
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        let Ok(mut body) = serde_json_core::to_string::<T, RESPONSE_CAPACITY>(value) else {
            return Self::internal_error();
        };
        if body.push('\n').is_err() {
            return Self::internal_error();
        }
        Self {
            status,
            content_type: CONTENT_TYPE_JSON,
            location: None,
            body,
        }
    }

    pub fn redirect(location: &'static str) -> Self {
        Self {
            status: 302,
            content_type: CONTENT_TYPE_TEXT,
            location: Some(location),
            body: String::new(),
        }
    }

    pub fn not_found() -> Self {
        Self::text(404, "Not found.")
    }

    fn internal_error() -> Self {
        let mut body = String::new();
        // Fits by construction.
        let _ = body.push_str("Internal error.\n");
        Self {
            status: 500,
            content_type: CONTENT_TYPE_TEXT,
            location: None,
            body,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Everything a request handler may read or mutate
pub struct Context<'a, S: BlobStore> {
    pub now: Instant,
    pub state: &'a mut State,
    pub config: &'a mut Config,
    pub store: &'a mut S,
    pub system: &'a SystemQueue,
}

/// Serve one request
pub fn handle<S: BlobStore>(ctx: Context<'_, S>, request: &Request<'_>) -> Response {
    match (request.method, request.route()) {
        (Method::Get, "/") => Response::redirect(CONFIGURATION_PATH),
        (Method::Get, CONFIGURATION_PATH) => get_configuration(ctx.config),
        (Method::Post | Method::Put, CONFIGURATION_PATH) => set_configuration(ctx, request),
        (Method::Get, "/v1/info/") => get_info(ctx.config),
        (Method::Get, "/v1/state/") => Response::json(200, &ctx.state.to_snapshot()),
        (Method::Put, "/v1/state/") => set_state(ctx.state, request),
        _ => Response::not_found(),
    }
}

fn get_configuration(config: &Config) -> Response {
    let mut body = String::new();
    if write_configuration_page(&mut body, config).is_err() {
        return Response::internal_error();
    }
    Response {
        status: 200,
        content_type: CONTENT_TYPE_HTML,
        location: None,
        body,
    }
}

fn set_configuration<S: BlobStore>(ctx: Context<'_, S>, request: &Request<'_>) -> Response {
    let body = match checked_body(request, CONTENT_TYPE_FORM) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let form = match DecodedForm::parse(body) {
        Ok(form) => form,
        Err(err) => return Response::text(400, err),
    };

    // Validate and persist a copy; the live config only changes once it is saved.
    let mut updated = ctx.config.clone();
    let result = updated
        .apply_form(&form.as_config_form())
        .and_then(|()| updated.save(ctx.store));
    if let Err(err) = result {
        let status = match err {
            ConfigError::Storage => 500,
            _ => 400,
        };
        return Response::text(status, err);
    }
    *ctx.config = updated;

    if ctx
        .system
        .post(SystemRequest::Restart {
            at: ctx.now + RESTART_DELAY,
        })
        .is_err()
    {
        #[cfg(feature = "esp32-log")]
        println!("[HTTP] system queue full, restart not scheduled");
    }

    Response::redirect(CONFIGURATION_PATH)
}

#[derive(Serialize)]
struct Info<'a> {
    name: &'a str,
    #[serde(rename = "num-leds")]
    num_leds: u16,
    fps: u32,
}

fn get_info(config: &Config) -> Response {
    Response::json(
        200,
        &Info {
            name: &config.name,
            num_leds: config.num_leds,
            fps: config.fps,
        },
    )
}

fn set_state(state: &mut State, request: &Request<'_>) -> Response {
    let body = match checked_body(request, CONTENT_TYPE_JSON) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let update = match serde_json_core::from_slice::<StateUpdate<'_>>(body) {
        Ok((update, _)) => update,
        Err(err) => {
            let mut message: String<128> = String::new();
            let _ = write!(message, "JSON error: {err}");
            return Response::text(400, message);
        }
    };

    match state.apply_update(&update) {
        Ok(()) => Response::json(200, &state.to_snapshot()),
        Err(UpdateError::Outdated { .. }) => Response::json(409, &state.to_snapshot()),
        Err(_) => Response::text(400, "Invalid state."),
    }
}

/// Body of a request that must carry `expected` content
fn checked_body<'a>(request: &Request<'a>, expected: &str) -> Result<&'a [u8], Response> {
    let Some(body) = request.body else {
        return Err(Response::text(400, "Missing message body."));
    };

    if !content_type_matches(request.content_type, expected) {
        let mut message: String<160> = String::new();
        let _ = write!(
            message,
            "Expecting '{}' content-type, got: '{}'.",
            expected,
            request.content_type.unwrap_or("")
        );
        return Err(Response::text(400, message));
    }

    Ok(body)
}

/// Compare media types, ignoring parameters and ASCII case
pub fn content_type_matches(actual: Option<&str>, expected: &str) -> bool {
    actual
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(expected))
}
