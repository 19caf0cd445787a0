use super::*;
use crate::net::error::ApiError;

#[test]
fn notices_default_empty() {
    let notices = Notices::default();
    assert!(notices.is_empty());
    assert_eq!(notices.len(), 0);
}

#[test]
fn drain_returns_arrival_order_and_empties() {
    let mut notices = Notices::default();
    notices.push(Notice::info("I_ONE", "one"));
    notices.push(Notice::error("E_TWO", "two"));
    let drained = notices.drain();
    assert_eq!(drained.iter().map(|n| n.code).collect::<Vec<_>>(), vec!["I_ONE", "E_TWO"]);
    assert!(notices.is_empty());
}

#[test]
fn from_error_copies_code_message_and_retry_hint() {
    let notice = Notice::from_error(&ApiError::Status { status: 503, body: String::new() });
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.code, "E_STATUS");
    assert_eq!(notice.message, "API returned status 503");
    assert!(notice.retryable);
}
