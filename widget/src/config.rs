//! Widget configuration supplied by the host at mount time.
//!
//! Every option has a named default so a host can mount the widget with
//! `WidgetConfig::default()` and override only what it needs. The struct
//! deserializes from camelCase JSON with missing keys defaulted.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Greeting used when the configured start message is blank.
pub const DEFAULT_START_MESSAGE: &str = "Hi, I'm your personal assistant, how can I help you?";
pub const DEFAULT_ERROR_TEXT: &str = "Error, server problem.";
pub const DEFAULT_AI_URL: &str = "http://localhost:5555";
pub const DEFAULT_SITE_URL: &str = "https://example.com/";
const DEFAULT_SHADOW: &str = "0px 4px 10px rgba(0, 0, 0, 0.2)";

/// Divisor applied to the window width to size message bubbles.
const MESSAGE_WIDTH_DIVISOR: f64 = 1.5;

/// Visual and behavioral options for one widget instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub background_color: String,
    pub input_color: String,
    pub bot_message_color: String,
    pub user_message_color: String,
    pub send_color: String,
    pub scrollbar_color: String,
    pub scrollbar_track_color: String,
    /// Endpoint receiving `POST {text, url}`.
    pub ai_url: String,
    pub left: String,
    pub bottom: String,
    pub top: String,
    pub right: String,
    pub width: String,
    pub height: String,
    pub border_radius: String,
    pub box_shadow: String,
    pub placeholder: String,
    /// Initial visibility of the chat window.
    pub show: bool,
    pub btn_background_image: String,
    pub btn_background_size: String,
    pub btn_left: String,
    pub btn_bottom: String,
    pub btn_top: String,
    pub btn_right: String,
    pub btn_width: String,
    pub btn_height: String,
    pub btn_border_radius: String,
    pub btn_box_shadow: String,
    pub btn_text: String,
    pub start_message: String,
    /// Text shown as bot message and error banner when a send fails
    /// without a server-supplied reply.
    pub error_text: String,
    /// Sent as the `url` field of every request.
    pub site_url: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            background_color: "#333".to_owned(),
            input_color: "white".to_owned(),
            bot_message_color: "blue".to_owned(),
            user_message_color: "green".to_owned(),
            send_color: "green".to_owned(),
            scrollbar_color: "gray".to_owned(),
            scrollbar_track_color: "#333".to_owned(),
            ai_url: DEFAULT_AI_URL.to_owned(),
            left: "10px".to_owned(),
            bottom: String::new(),
            top: String::new(),
            right: String::new(),
            width: "300px".to_owned(),
            height: "400px".to_owned(),
            border_radius: "10px".to_owned(),
            box_shadow: DEFAULT_SHADOW.to_owned(),
            placeholder: "Write message...".to_owned(),
            show: false,
            btn_background_image: String::new(),
            btn_background_size: String::new(),
            btn_left: String::new(),
            btn_bottom: "10px".to_owned(),
            btn_top: String::new(),
            btn_right: "10px".to_owned(),
            btn_width: "70px".to_owned(),
            btn_height: "70px".to_owned(),
            btn_border_radius: "999px".to_owned(),
            btn_box_shadow: DEFAULT_SHADOW.to_owned(),
            btn_text: "Open Chat".to_owned(),
            start_message: DEFAULT_START_MESSAGE.to_owned(),
            error_text: DEFAULT_ERROR_TEXT.to_owned(),
            site_url: DEFAULT_SITE_URL.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// The bot greeting seeded on first load and after a clear.
    ///
    /// Falls back to [`DEFAULT_START_MESSAGE`] when the configured message is
    /// blank after trimming.
    pub fn greeting(&self) -> &str {
        if self.start_message.trim().is_empty() {
            DEFAULT_START_MESSAGE
        } else {
            &self.start_message
        }
    }

    /// Maximum bubble width in pixels: leading integer of `width` / 1.5.
    ///
    /// Returns `NaN` when `width` has no numeric prefix (e.g. `"auto"`).
    pub fn message_width_px(&self) -> f64 {
        leading_int(&self.width).map_or(f64::NAN, |n| n / MESSAGE_WIDTH_DIVISOR)
    }
}

/// Parse a leading decimal integer the way browsers parse `300px`:
/// optional whitespace, optional sign, then digits up to the first non-digit.
/// The digit run is read as `f64` so arbitrarily long runs stay finite.
fn leading_int(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits].parse::<f64>().ok()?;
    Some(if negative { -value } else { value })
}
