//! IPC protocol between Rust and the pages it hosts.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: pages call `window.ipc.postMessage(JSON.stringify({kind, payload}))`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to invoke
//!   `window.isolix._dispatch` in the chrome page.
//!
//! The chrome page may send `ready`, `command` and `drag_window`; panel
//! pages may only report pointer enter/leave. Anything else is rejected.

use isolix_common::Command;
use serde::{Deserialize, Serialize};

/// A raw IPC message from JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type.
    pub kind: String,
    /// Arbitrary JSON payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IpcError {
    #[error("malformed IPC message")]
    Malformed,

    #[error("IPC kind not allowed: {0}")]
    Blocked(String),

    #[error("bad payload for {kind}: {reason}")]
    BadPayload { kind: String, reason: String },
}

// =============================================================================
// CHROME
// =============================================================================

/// Kinds the chrome page may send.
const CHROME_IPC_KINDS: &[&str] = &["ready", "command", "drag_window"];

/// A validated request from the chrome page.
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeRequest {
    /// The chrome finished loading and wants a state snapshot.
    Ready,
    Command(Command),
    /// Pointer went down on the title bar; start a native window drag.
    DragWindow,
}

pub fn is_chrome_kind_allowed(kind: &str) -> bool {
    CHROME_IPC_KINDS.contains(&kind)
}

pub fn parse_chrome_message(body: &str) -> Result<ChromeRequest, IpcError> {
    let msg = IpcMessage::from_json(body).ok_or(IpcError::Malformed)?;
    if !is_chrome_kind_allowed(&msg.kind) {
        return Err(IpcError::Blocked(msg.kind));
    }
    match msg.kind.as_str() {
        "ready" => Ok(ChromeRequest::Ready),
        "drag_window" => Ok(ChromeRequest::DragWindow),
        _ => {
            let command: Command =
                serde_json::from_value(msg.payload).map_err(|e| IpcError::BadPayload {
                    kind: msg.kind.clone(),
                    reason: e.to_string(),
                })?;
            // Views report their own status; the chrome cannot forge it.
            if matches!(
                command,
                Command::ViewStatus { .. } | Command::PageTitleChanged { .. }
            ) {
                return Err(IpcError::Blocked(command.label().to_string()));
            }
            Ok(ChromeRequest::Command(command))
        }
    }
}

/// JavaScript that sets up the chrome side of the IPC bridge.
pub const CHROME_IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.isolix = window.isolix || {};
    window.isolix.send = function(kind, payload) {
        window.ipc.postMessage(JSON.stringify({
            kind: kind,
            payload: payload === undefined ? null : payload
        }));
    };
    window.isolix.command = function(type, data) {
        var cmd = { type: type };
        if (data !== undefined) cmd.data = data;
        window.isolix.send("command", cmd);
    };
    window.isolix._handlers = {};
    window.isolix.on = function(kind, callback) {
        window.isolix._handlers[kind] = callback;
    };
    window.isolix._dispatch = function(kind, payload) {
        var handler = window.isolix._handlers[kind];
        if (handler) {
            handler(payload);
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the chrome's handlers.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.isolix && window.isolix._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

// =============================================================================
// PANELS
// =============================================================================

/// Pointer report from a panel page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSignal {
    PointerEnter,
    PointerLeave,
}

pub fn parse_panel_message(body: &str) -> Result<PanelSignal, IpcError> {
    let msg = IpcMessage::from_json(body).ok_or(IpcError::Malformed)?;
    match msg.kind.as_str() {
        "pointer_enter" => Ok(PanelSignal::PointerEnter),
        "pointer_leave" => Ok(PanelSignal::PointerLeave),
        _ => Err(IpcError::Blocked(msg.kind)),
    }
}

/// Injected into every panel page: reports when the pointer enters or
/// leaves the document.
///
/// The panel's header sits directly above the page, so leaving through the
/// top edge is not a leave; the header reports that panel's hover itself.
pub const PANEL_POINTER_SCRIPT: &str = r#"
(function() {
    if (window.__isolixPointer) return;
    window.__isolixPointer = true;
    var inside = false;
    function post(kind) {
        try {
            window.ipc.postMessage(JSON.stringify({ kind: kind }));
        } catch (e) {}
    }
    document.addEventListener("mouseover", function() {
        if (!inside) {
            inside = true;
            post("pointer_enter");
        }
    }, true);
    document.addEventListener("mouseout", function(e) {
        if (!e.relatedTarget && inside) {
            inside = false;
            if (e.clientY > 0) post("pointer_leave");
        }
    }, true);
})();
"#;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use isolix_common::{HistoryStep, PanelId};

    use super::*;

    #[test]
    fn chrome_ready() {
        assert_eq!(
            parse_chrome_message(r#"{"kind":"ready"}"#),
            Ok(ChromeRequest::Ready)
        );
    }

    #[test]
    fn chrome_drag_window() {
        assert_eq!(
            parse_chrome_message(r#"{"kind":"drag_window","payload":null}"#),
            Ok(ChromeRequest::DragWindow)
        );
    }

    #[test]
    fn chrome_command_with_data() {
        let body = r#"{"kind":"command","payload":{"type":"submit","data":"@gpt hi"}}"#;
        assert_eq!(
            parse_chrome_message(body),
            Ok(ChromeRequest::Command(Command::Submit("@gpt hi".into())))
        );

        let body = r#"{"kind":"command","payload":{"type":"panel_history","data":{"id":"p1","step":"back"}}}"#;
        assert_eq!(
            parse_chrome_message(body),
            Ok(ChromeRequest::Command(Command::PanelHistory {
                id: PanelId::from("p1"),
                step: HistoryStep::Back,
            }))
        );
    }

    #[test]
    fn chrome_unit_command() {
        let body = r#"{"kind":"command","payload":{"type":"create_workspace"}}"#;
        assert_eq!(
            parse_chrome_message(body),
            Ok(ChromeRequest::Command(Command::CreateWorkspace))
        );
    }

    #[test]
    fn chrome_rejects_unknown_kinds() {
        assert_eq!(
            parse_chrome_message(r#"{"kind":"eval","payload":"1"}"#),
            Err(IpcError::Blocked("eval".into()))
        );
        assert!(!is_chrome_kind_allowed("READY"));
        assert!(!is_chrome_kind_allowed("ready\0"));
    }

    #[test]
    fn chrome_cannot_forge_view_reports() {
        let body = r#"{"kind":"command","payload":{"type":"page_title_changed","data":{"id":"p1","title":"x"}}}"#;
        assert!(matches!(
            parse_chrome_message(body),
            Err(IpcError::Blocked(_))
        ));
    }

    #[test]
    fn chrome_bad_payload() {
        let body = r#"{"kind":"command","payload":{"type":"no_such_command"}}"#;
        assert!(matches!(
            parse_chrome_message(body),
            Err(IpcError::BadPayload { .. })
        ));
        assert_eq!(parse_chrome_message("not json"), Err(IpcError::Malformed));
    }

    #[test]
    fn panel_pointer_signals() {
        assert_eq!(
            parse_panel_message(r#"{"kind":"pointer_enter"}"#),
            Ok(PanelSignal::PointerEnter)
        );
        assert_eq!(
            parse_panel_message(r#"{"kind":"pointer_leave","payload":null}"#),
            Ok(PanelSignal::PointerLeave)
        );
        assert_eq!(
            parse_panel_message(r#"{"kind":"command","payload":{"type":"close"}}"#),
            Err(IpcError::Blocked("command".into()))
        );
    }

    #[test]
    fn dispatch_script_escapes_kind() {
        let js = js_dispatch_message("state", &serde_json::json!({"a": 1}));
        assert_eq!(js, r#"window.isolix && window.isolix._dispatch("state", {"a":1});"#);
    }

    #[test]
    fn init_scripts_post_expected_kinds() {
        assert!(PANEL_POINTER_SCRIPT.contains("pointer_enter"));
        assert!(PANEL_POINTER_SCRIPT.contains("pointer_leave"));
        assert!(PANEL_POINTER_SCRIPT.contains("e.clientY > 0"));
        assert!(CHROME_IPC_INIT_SCRIPT.contains("\"command\""));
    }
}
