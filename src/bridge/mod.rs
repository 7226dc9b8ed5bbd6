//! Bridge protocol between hosted content and the shell
//!
//! Content posts `{"type": ..., "payload": {...}}` JSON strings over the
//! renderer's one-way channel. The observers that produce these messages
//! are injected by the renderer before any application code runs, see
//! [`observer_script`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delay after installation before the liveness ping is posted
pub const DEFAULT_BOOT_PING_DELAY_MS: u64 = 1200;

/// Message shown when a runtime error arrives without one
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// A message posted by hosted content.
///
/// Decoding is lenient about the payload: a missing payload or side fields
/// of the wrong type still yield the message, only the `type` must be known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "snake_case",
    try_from = "WireMessage"
)]
pub enum BridgeMessage {
    /// Uncaught error or unhandled rejection inside the content
    RuntimeError {
        #[serde(default)]
        message: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        col: Option<u64>,
    },

    /// The document finished structural parsing
    DomReady {
        #[serde(default)]
        href: String,
    },

    /// Deferred liveness signal
    BootPing {
        #[serde(default)]
        href: String,
    },
}

/// Loosely typed form of a message as it arrives on the channel
#[derive(Deserialize)]
struct WireMessage {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl TryFrom<WireMessage> for BridgeMessage {
    type Error = String;

    fn try_from(wire: WireMessage) -> Result<Self, Self::Error> {
        let field = |name: &str| wire.payload.get(name);

        match wire.kind.as_str() {
            "runtime_error" => Ok(BridgeMessage::RuntimeError {
                message: text_field(field("message")),
                source: text_field(field("source")),
                line: number_field(field("line")),
                col: number_field(field("col")),
            }),
            "dom_ready" => Ok(BridgeMessage::DomReady {
                href: text_field(field("href")).unwrap_or_default(),
            }),
            "boot_ping" => Ok(BridgeMessage::BootPing {
                href: text_field(field("href")).unwrap_or_default(),
            }),
            other => Err(format!("unknown message type '{other}'")),
        }
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn number_field(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

impl BridgeMessage {
    /// Parse a raw message from the content channel; malformed input yields `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(raw) {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::debug!(error = %e, "dropping malformed bridge message");
                None
            }
        }
    }

    /// Serialize to the wire format
    pub fn to_wire(&self) -> String {
        // Serializing plain strings and integers cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Error text carried by a runtime error, with the shell's fallback
    pub fn runtime_error_message(&self) -> Option<&str> {
        match self {
            BridgeMessage::RuntimeError { message, .. } => Some(
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(UNKNOWN_ERROR_MESSAGE),
            ),
            _ => None,
        }
    }
}

/// JavaScript the renderer injects before content loads.
///
/// Installs the global error, unhandled rejection and content-ready
/// observers plus the one-shot boot ping. Posting failures are swallowed
/// so the bridge never throws into the content.
pub fn observer_script(boot_ping_delay_ms: u64) -> String {
    OBSERVER_TEMPLATE.replace("__BOOT_PING_DELAY__", &boot_ping_delay_ms.to_string())
}

const OBSERVER_TEMPLATE: &str = r"(function () {
  var post = function (type, payload) {
    try {
      if (!window.ReactNativeWebView || !window.ReactNativeWebView.postMessage) return;
      window.ReactNativeWebView.postMessage(JSON.stringify({
        type: type,
        payload: payload || {}
      }));
    } catch (_) {}
  };
  window.addEventListener('error', function (e) {
    post('runtime_error', {
      message: e && e.message ? e.message : 'Unknown script error',
      source: e && e.filename ? e.filename : '',
      line: e && e.lineno ? e.lineno : 0,
      col: e && e.colno ? e.colno : 0
    });
  });
  window.addEventListener('unhandledrejection', function (e) {
    var reason = e && e.reason && e.reason.message
      ? e.reason.message
      : String((e && e.reason) || 'Unhandled promise rejection');
    post('runtime_error', { message: reason });
  });
  document.addEventListener('DOMContentLoaded', function () {
    post('dom_ready', { href: location.href });
  });
  setTimeout(function () {
    post('boot_ping', { href: location.href });
  }, __BOOT_PING_DELAY__);
  true;
})();
";
