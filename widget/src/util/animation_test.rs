use super::*;

#[test]
fn open_frame_css_is_fully_visible() {
    assert_eq!(OPEN_FRAME.css(), "opacity: 1; transform: translateY(0px) scale(1);");
}

#[test]
fn closed_frame_css_is_hidden_and_lifted() {
    assert_eq!(CLOSED_FRAME.css(), "opacity: 0; transform: translateY(-100px) scale(0);");
}

#[test]
fn transition_css_uses_duration_in_seconds() {
    assert_eq!(
        transition_css(TRANSITION_DURATION),
        "transition: opacity 0.6s ease, transform 0.6s ease;"
    );
}
