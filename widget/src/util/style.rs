//! Inline style builders driven by `WidgetConfig`.
//!
//! Empty option strings are skipped, so an unset position (`top: ""`) leaves
//! the property to the stylesheet instead of emitting `top: ;`.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt::Write as _;

use crate::config::WidgetConfig;
use crate::state::chat::Sender;
use crate::state::visibility::VisibilityState;
use crate::util::animation::{TRANSITION_DURATION, transition_css};

fn push_decl(out: &mut String, property: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    let _ = write!(out, "{property}: {value}; ");
}

fn push_position(out: &mut String, left: &str, bottom: &str, top: &str, right: &str) {
    out.push_str("position: fixed; ");
    push_decl(out, "left", left);
    push_decl(out, "bottom", bottom);
    push_decl(out, "top", top);
    push_decl(out, "right", right);
}

/// Style of the chat window for the current visibility state.
pub fn window_style(config: &WidgetConfig, visibility: &VisibilityState) -> String {
    let mut out = String::new();
    push_position(&mut out, &config.left, &config.bottom, &config.top, &config.right);
    push_decl(&mut out, "width", &config.width);
    push_decl(&mut out, "height", &config.height);
    push_decl(&mut out, "background-color", &config.background_color);
    push_decl(&mut out, "border-radius", &config.border_radius);
    push_decl(&mut out, "box-shadow", &config.box_shadow);
    out.push_str(&visibility.frame().css());
    out.push(' ');
    out.push_str(&transition_css(TRANSITION_DURATION));
    if !visibility.is_shown() && !visibility.in_flight() {
        out.push_str(" pointer-events: none;");
    }
    out
}

/// Style of the launcher button.
pub fn launcher_style(config: &WidgetConfig) -> String {
    let mut out = String::new();
    push_position(&mut out, &config.btn_left, &config.btn_bottom, &config.btn_top, &config.btn_right);
    push_decl(&mut out, "width", &config.btn_width);
    push_decl(&mut out, "height", &config.btn_height);
    push_decl(&mut out, "border-radius", &config.btn_border_radius);
    push_decl(&mut out, "box-shadow", &config.btn_box_shadow);
    if !config.btn_background_image.trim().is_empty() {
        let _ = write!(out, "background-image: url('{}'); ", config.btn_background_image);
        push_decl(&mut out, "background-size", &config.btn_background_size);
    }
    out.push_str("cursor: pointer;");
    out
}

/// Style of the scrollable message list.
pub fn message_list_style(config: &WidgetConfig) -> String {
    format!(
        "overflow-y: auto; scrollbar-color: {} {};",
        config.scrollbar_color, config.scrollbar_track_color
    )
}

/// Style of one message bubble.
///
/// The bubble width stays unconstrained when the configured window width has
/// no numeric prefix.
pub fn bubble_style(config: &WidgetConfig, sender: Sender) -> String {
    let color = match sender {
        Sender::User => &config.user_message_color,
        Sender::Bot => &config.bot_message_color,
    };
    let mut out = String::new();
    push_decl(&mut out, "background-color", color);
    let max_width = config.message_width_px();
    if max_width.is_finite() {
        let _ = write!(out, "max-width: {max_width}px;");
    }
    out.trim_end().to_owned()
}

pub fn input_style(config: &WidgetConfig) -> String {
    let mut out = String::new();
    push_decl(&mut out, "color", &config.input_color);
    out.trim_end().to_owned()
}

pub fn send_button_style(config: &WidgetConfig) -> String {
    let mut out = String::new();
    push_decl(&mut out, "background-color", &config.send_color);
    out.trim_end().to_owned()
}
