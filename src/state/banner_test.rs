use super::*;

#[test]
fn banner_starts_hidden() {
    let banner = BannerState::default();
    assert!(!banner.visible);
    assert!(banner.message.is_empty());
}

#[test]
fn show_then_hide_with_current_ticket() {
    let mut banner = BannerState::default();
    let ticket = banner.show("Welcome back, Ada!");
    assert!(banner.visible);
    assert_eq!(banner.message, "Welcome back, Ada!");
    assert!(banner.hide(ticket));
    assert!(!banner.visible);
}

#[test]
fn stale_ticket_does_not_hide_newer_message() {
    let mut banner = BannerState::default();
    let first = banner.show("first");
    let second = banner.show("second");
    assert_ne!(first, second);

    assert!(!banner.hide(first));
    assert!(banner.visible);
    assert_eq!(banner.message, "second");

    assert!(banner.hide(second));
    assert!(!banner.visible);
}

#[test]
fn hide_twice_is_a_no_op() {
    let mut banner = BannerState::default();
    let ticket = banner.show("hello");
    assert!(banner.hide(ticket));
    assert!(!banner.hide(ticket));
}

#[test]
fn show_does_not_stack_messages() {
    let mut banner = BannerState::default();
    banner.show("one");
    banner.show("two");
    assert_eq!(banner.message, "two");
}
