use super::*;

fn limiter(limit: usize, window_secs: u64) -> RateLimiter {
    RateLimiter::new(RateLimitConfig { limit, window: Duration::from_secs(window_secs) })
}

#[test]
fn allows_up_to_limit() {
    let rl = limiter(3, 60);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at(now),
        Err(RateLimitError::GlobalExceeded { limit: 3, window_secs: 60 })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 60);
    let start = Instant::now();

    rl.check_and_record_at(start).unwrap();
    rl.check_and_record_at(start).unwrap();
    assert!(rl.check_and_record_at(start).is_err());

    let after_window = start + Duration::from_secs(60) + Duration::from_millis(1);
    assert!(rl.check_and_record_at(after_window).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(1, 10);
    let start = Instant::now();

    rl.check_and_record_at(start).unwrap();
    for _ in 0..5 {
        assert!(rl.check_and_record_at(start + Duration::from_secs(5)).is_err());
    }

    // Only the first request counts, so the window frees up 10s after it.
    assert!(rl.check_and_record_at(start + Duration::from_secs(11)).is_ok());
}

#[test]
fn zero_limit_rejects_everything() {
    let rl = limiter(0, 60);
    assert!(rl.check_and_record_at(Instant::now()).is_err());
}

#[test]
fn clones_share_the_window() {
    let rl = limiter(1, 60);
    let clone = rl.clone();
    let now = Instant::now();

    rl.check_and_record_at(now).unwrap();
    assert!(clone.check_and_record_at(now).is_err());
}

#[test]
fn default_config_values() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.limit, 30);
    assert_eq!(cfg.window, Duration::from_secs(60));
}

#[test]
fn error_message_mentions_limit_and_window() {
    let err = RateLimitError::GlobalExceeded { limit: 30, window_secs: 60 };
    assert_eq!(err.to_string(), "global rate limit exceeded (max 30 requests/60s)");
}
