use super::*;

#[test]
fn form_message_classes_follow_tone() {
    assert_eq!(FormMessage::neutral("x").class(), "form-message");
    assert_eq!(FormMessage::error("x").class(), "form-message error");
    assert_eq!(FormMessage::success("x").class(), "form-message success");
}

#[test]
fn form_message_default_is_blank_and_neutral() {
    let msg = FormMessage::default();
    assert!(msg.text.is_empty());
    assert_eq!(msg.tone, MessageTone::Neutral);
    assert_eq!(msg.class(), "form-message");
}

#[test]
fn form_error_display_uses_page_copy() {
    assert_eq!(
        FormError::MissingRegisterFields.to_string(),
        "All fields are required (yes, every single one)"
    );
    assert_eq!(
        FormError::MissingLoginFields.to_string(),
        "Email and password are both required (shocking, we know)"
    );
}

#[test]
fn submit_phase_defaults_to_idle() {
    assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
    assert!(!SubmitPhase::Idle.is_submitting());
    assert!(SubmitPhase::Submitting.is_submitting());
}
