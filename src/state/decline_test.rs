use super::*;

#[test]
fn decline_modal_default_is_idle_and_hidden() {
    let modal = DeclineModal::default();
    assert_eq!(modal, DeclineModal::Idle);
    assert!(!modal.is_visible());
    assert_eq!(modal.target(), None);
}

#[test]
fn open_shows_modal_for_target() {
    let mut modal = DeclineModal::default();
    modal.open(Id::from("u1"));
    assert!(modal.is_visible());
    assert_eq!(modal.target(), Some(&Id::from("u1")));
}

#[test]
fn confirm_without_deny_hides_and_returns_nothing() {
    let mut modal = DeclineModal::default();
    modal.open(Id::from("u1"));
    assert_eq!(modal.confirm(false), None);
    assert_eq!(modal, DeclineModal::Idle);
}

#[test]
fn confirm_with_deny_returns_stored_target_and_enters_deleting() {
    let mut modal = DeclineModal::default();
    modal.open(Id::from("u1"));
    assert_eq!(modal.confirm(true), Some(Id::from("u1")));
    assert_eq!(modal, DeclineModal::Deleting { target: Id::from("u1") });
    assert!(!modal.is_visible());
}

#[test]
fn confirm_while_idle_is_a_no_op() {
    let mut modal = DeclineModal::default();
    assert_eq!(modal.confirm(true), None);
    assert_eq!(modal, DeclineModal::Idle);
}

#[test]
fn second_confirm_does_not_repeat_target() {
    let mut modal = DeclineModal::default();
    modal.open(Id::from("u1"));
    assert!(modal.confirm(true).is_some());
    assert_eq!(modal.confirm(true), None);
}

#[test]
fn cancel_closes_confirming_only() {
    let mut modal = DeclineModal::Deleting { target: Id::from("u1") };
    modal.cancel();
    assert_eq!(modal, DeclineModal::Deleting { target: Id::from("u1") });

    let mut modal = DeclineModal::default();
    modal.open(Id::from("u2"));
    modal.cancel();
    assert_eq!(modal, DeclineModal::Idle);
}

#[test]
fn settle_only_clears_matching_delete() {
    let mut modal = DeclineModal::Deleting { target: Id::from("u1") };
    modal.settle(&Id::from("u2"));
    assert!(matches!(modal, DeclineModal::Deleting { .. }));
    modal.settle(&Id::from("u1"));
    assert_eq!(modal, DeclineModal::Idle);
}
