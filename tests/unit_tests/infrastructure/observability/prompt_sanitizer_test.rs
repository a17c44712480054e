use syllabus_tutor::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_question_when_sanitizing_then_returns_unchanged() {
    let question = "Explain the concept of Eigenvalues";
    assert_eq!(sanitize_prompt(question), question);
}

#[test]
fn given_long_question_when_sanitizing_then_truncates_with_length() {
    let question = "a".repeat(150);
    let result = sanitize_prompt(&question);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_multibyte_question_when_truncating_then_cuts_on_char_boundary() {
    let question = "∑".repeat(120);
    let result = sanitize_prompt(&question);
    assert!(result.starts_with(&"∑".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer sk-abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_query_string_key_when_sanitizing_then_redacts_key() {
    let result = sanitize_prompt("GET /v1beta/files?key=AIzaSecret&alt=json");
    assert!(result.contains("key=[REDACTED]&alt=json"));
    assert!(!result.contains("AIzaSecret"));
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_every_occurrence() {
    let result = sanitize_prompt("password=one and password=two");
    assert_eq!(result, "password=[REDACTED] and password=[REDACTED]");
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let result = sanitize_prompt("Send request with api_key=secret123");
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_marker_inside_word_when_sanitizing_then_left_untouched() {
    let question = "If monkey=3 and turkey=4, what is monkey+turkey?";
    assert_eq!(sanitize_prompt(question), question);
}

#[test]
fn given_access_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("callback?access_token=abc123");
    assert_eq!(result, "callback?access_token=[REDACTED]");
}
