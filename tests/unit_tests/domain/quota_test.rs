use syllabus_tutor::domain::{DEFAULT_QUESTION_LIMIT, QuestionQuota, Session};

#[test]
fn given_default_quota_when_created_then_allows_five_questions() {
    let quota = QuestionQuota::default();
    assert_eq!(quota.limit(), DEFAULT_QUESTION_LIMIT);
    assert_eq!(quota.remaining(), 5);
    assert!(!quota.is_exhausted());
}

#[test]
fn given_five_consumed_questions_when_asking_sixth_then_rejected() {
    let mut quota = QuestionQuota::new(5);

    for expected_remaining in (0..5).rev() {
        assert_eq!(quota.try_consume(), Ok(expected_remaining));
    }

    let sixth = quota.try_consume();
    assert!(sixth.is_err());
    assert!(quota.is_exhausted());
    assert_eq!(quota.remaining(), 0);
}

#[test]
fn given_exhausted_quota_when_rejected_then_message_names_limit() {
    let mut quota = QuestionQuota::new(2);
    quota.try_consume().unwrap();
    quota.try_consume().unwrap();

    let error = quota.try_consume().unwrap_err();
    assert_eq!(error.limit, 2);
    assert!(error.to_string().contains("2-message limit"));
}

#[test]
fn given_exhausted_quota_when_reset_then_full_budget_restored() {
    let mut quota = QuestionQuota::new(1);
    quota.try_consume().unwrap();
    assert!(quota.is_exhausted());

    quota.reset();

    assert_eq!(quota.remaining(), 1);
}

#[test]
fn given_zero_limit_when_consuming_then_rejected_immediately() {
    let mut quota = QuestionQuota::new(0);
    assert!(quota.try_consume().is_err());
}

#[test]
fn given_session_when_recording_questions_then_transcript_and_quota_move_together() {
    let mut session = Session::new(2);

    assert_eq!(session.record_question("What is a matrix?"), Ok(1));
    session.record_answer("A rectangular array.");
    assert_eq!(session.record_question("And a vector?"), Ok(0));

    assert!(session.record_question("One more?").is_err());
    assert_eq!(session.questions_asked(), 2);
    assert_eq!(session.transcript.len(), 3);
}

#[test]
fn given_used_session_when_transcript_reset_then_quota_resets() {
    let mut session = Session::new(1);
    session.record_question("Explain eigenvalues").unwrap();

    session.reset_transcript();

    assert!(session.transcript.is_empty());
    assert_eq!(session.quota.remaining(), 1);
}
