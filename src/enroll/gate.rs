use super::sanitize::{contains_suspicious_pattern, sanitize, FieldKind};
use super::submission::{EnrollmentSubmission, CANONICAL_FIELD_ORDER};

// A human needs at least this long to fill five fields.
pub const MIN_FILL_TIME_MS: i64 = 2_000;
// Filling the fields in exact markup order faster than this reads as a
// scripted fill. Known to risk false positives on very methodical users.
pub const SEQUENTIAL_FILL_WINDOW_MS: i64 = 10_000;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const PHONE_MIN: usize = 7;
const PHONE_MAX: usize = 25;
const TEXT_MIN: usize = 2;
const TEXT_MAX: usize = 100;

/// Field values after sanitization, carried on Allow so the dispatcher
/// posts exactly what the gate validated.
#[derive(Clone, PartialEq, Debug)]
pub struct SanitizedFields {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub current_job_status: String,
    pub desired_occupation: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum GateResult {
    Allow(SanitizedFields),
    Reject(RejectReason),
}

#[derive(Clone, PartialEq, Debug)]
pub enum RejectReason {
    HoneypotFilled,
    TooFast,
    NoInteraction,
    SequentialFill,
    FieldLength(&'static str),
    SuspiciousContent,
}

impl RejectReason {
    /// Maps the internal reason to user-facing text. Bot-suspected reasons
    /// all share one generic string so automated callers learn nothing
    /// about which heuristic tripped.
    pub fn user_message(&self) -> String {
        match self {
            RejectReason::HoneypotFilled | RejectReason::SequentialFill => {
                "Your enrollment could not be submitted. Please try again.".to_string()
            }
            RejectReason::TooFast => {
                "Please take your time filling out the form before submitting.".to_string()
            }
            RejectReason::NoInteraction => "Please fill out all fields.".to_string(),
            RejectReason::FieldLength(message) => (*message).to_string(),
            RejectReason::SuspiciousContent => {
                "Invalid input. Please check your details and try again.".to_string()
            }
        }
    }
}

/// Decides whether the submission looks human and well-formed. Checks run
/// in order and stop at the first failure; no network is touched here.
pub fn evaluate(submission: &EnrollmentSubmission, now_ms: i64) -> GateResult {
    if !submission.honeypot_value.trim().is_empty() {
        return GateResult::Reject(RejectReason::HoneypotFilled);
    }

    let elapsed = submission.elapsed_ms(now_ms);
    if elapsed < MIN_FILL_TIME_MS {
        return GateResult::Reject(RejectReason::TooFast);
    }

    if !submission.has_interacted {
        return GateResult::Reject(RejectReason::NoInteraction);
    }

    let canonical = submission.field_fill_order.len() == CANONICAL_FIELD_ORDER.len()
        && submission
            .field_fill_order
            .iter()
            .zip(CANONICAL_FIELD_ORDER)
            .all(|(got, want)| got == want);
    if canonical && elapsed < SEQUENTIAL_FILL_WINDOW_MS {
        return GateResult::Reject(RejectReason::SequentialFill);
    }

    let fields = SanitizedFields {
        full_name: sanitize(&submission.full_name, FieldKind::Name),
        email: sanitize(&submission.email, FieldKind::Email),
        phone_number: sanitize(&submission.phone_number, FieldKind::Phone),
        current_job_status: sanitize(&submission.current_job_status, FieldKind::Text),
        desired_occupation: sanitize(&submission.desired_occupation, FieldKind::Text),
    };

    if fields.full_name.chars().count() < NAME_MIN || fields.full_name.chars().count() > NAME_MAX {
        return GateResult::Reject(RejectReason::FieldLength(
            "Please enter your full name (2-100 characters).",
        ));
    }
    if fields.email.is_empty() || fields.email.chars().count() > EMAIL_MAX {
        return GateResult::Reject(RejectReason::FieldLength(
            "Please enter a valid email address.",
        ));
    }
    if fields.phone_number.chars().count() < PHONE_MIN
        || fields.phone_number.chars().count() > PHONE_MAX
    {
        return GateResult::Reject(RejectReason::FieldLength(
            "Please enter a valid phone number (7-25 characters).",
        ));
    }
    if fields.current_job_status.chars().count() < TEXT_MIN
        || fields.current_job_status.chars().count() > TEXT_MAX
    {
        return GateResult::Reject(RejectReason::FieldLength(
            "Please describe your current job status (2-100 characters).",
        ));
    }
    if fields.desired_occupation.chars().count() < TEXT_MIN
        || fields.desired_occupation.chars().count() > TEXT_MAX
    {
        return GateResult::Reject(RejectReason::FieldLength(
            "Please describe your desired occupation (2-100 characters).",
        ));
    }

    let scanned = [
        fields.full_name.as_str(),
        fields.email.as_str(),
        fields.phone_number.as_str(),
        fields.current_job_status.as_str(),
        fields.desired_occupation.as_str(),
        submission.course_type.as_str(),
    ];
    if scanned.iter().any(|value| contains_suspicious_pattern(value)) {
        return GateResult::Reject(RejectReason::SuspiciousContent);
    }

    GateResult::Allow(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission(opened_at_ms: i64) -> EnrollmentSubmission {
        let mut s = EnrollmentSubmission::new("music-production".into(), opened_at_ms);
        s.full_name = "Maija Virtanen".into();
        s.email = "maija@example.com".into();
        s.phone_number = "+358451234567".into();
        s.current_job_status = "Studying".into();
        s.desired_occupation = "Sound engineer".into();
        // Non-canonical order, as a human tabbing around would produce.
        for field in ["email", "fullName", "phoneNumber", "desiredOccupation", "currentJobStatus"] {
            s.record_focus(field);
        }
        s
    }

    #[test]
    fn filled_honeypot_rejects_regardless_of_everything_else() {
        let mut s = valid_submission(0);
        s.honeypot_value = "http://spam.example".into();
        assert_eq!(evaluate(&s, 60_000), GateResult::Reject(RejectReason::HoneypotFilled));

        // Whitespace-only honeypot is fine.
        let mut s = valid_submission(0);
        s.honeypot_value = "   ".into();
        assert!(matches!(evaluate(&s, 60_000), GateResult::Allow(_)));
    }

    #[test]
    fn honeypot_wins_even_when_all_other_fields_are_empty() {
        let mut s = EnrollmentSubmission::new("music-production".into(), 0);
        s.honeypot_value = "http://spam.example".into();
        assert_eq!(evaluate(&s, 0), GateResult::Reject(RejectReason::HoneypotFilled));
    }

    #[test]
    fn submissions_under_two_seconds_are_rejected() {
        let s = valid_submission(10_000);
        assert_eq!(evaluate(&s, 11_999), GateResult::Reject(RejectReason::TooFast));
        assert!(matches!(evaluate(&s, 22_000), GateResult::Allow(_)));
    }

    #[test]
    fn no_interaction_rejects_even_after_two_seconds() {
        let mut s = valid_submission(0);
        s.has_interacted = false;
        s.field_fill_order.clear();
        assert_eq!(evaluate(&s, 60_000), GateResult::Reject(RejectReason::NoInteraction));
    }

    #[test]
    fn canonical_order_is_rejected_only_when_fast() {
        let mut s = valid_submission(0);
        s.field_fill_order = super::CANONICAL_FIELD_ORDER
            .iter()
            .map(|f| (*f).to_string())
            .collect();
        assert_eq!(evaluate(&s, 5_000), GateResult::Reject(RejectReason::SequentialFill));
        assert!(matches!(evaluate(&s, 15_000), GateResult::Allow(_)));
        // Boundary: exactly 10s is no longer "fast".
        assert!(matches!(evaluate(&s, 10_000), GateResult::Allow(_)));
        assert_eq!(evaluate(&s, 9_999), GateResult::Reject(RejectReason::SequentialFill));
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        let mut s = valid_submission(0);
        s.full_name = "A".into();
        assert!(matches!(
            evaluate(&s, 60_000),
            GateResult::Reject(RejectReason::FieldLength(m)) if m.contains("full name")
        ));

        s.full_name = "Ab".into();
        assert!(matches!(evaluate(&s, 60_000), GateResult::Allow(_)));

        s.full_name = "A".repeat(100);
        assert!(matches!(evaluate(&s, 60_000), GateResult::Allow(_)));

        s.full_name = "A".repeat(101);
        assert!(matches!(
            evaluate(&s, 60_000),
            GateResult::Reject(RejectReason::FieldLength(_))
        ));
    }

    #[test]
    fn phone_and_text_bounds_are_enforced() {
        let mut s = valid_submission(0);
        s.phone_number = "123456".into();
        assert!(matches!(
            evaluate(&s, 60_000),
            GateResult::Reject(RejectReason::FieldLength(m)) if m.contains("phone")
        ));

        let mut s = valid_submission(0);
        s.current_job_status = "x".into();
        assert!(matches!(
            evaluate(&s, 60_000),
            GateResult::Reject(RejectReason::FieldLength(m)) if m.contains("job status")
        ));
    }

    #[test]
    fn email_that_sanitizes_to_empty_is_rejected() {
        let mut s = valid_submission(0);
        s.email = " <> ".into();
        assert!(matches!(
            evaluate(&s, 60_000),
            GateResult::Reject(RejectReason::FieldLength(m)) if m.contains("email")
        ));
    }

    #[test]
    fn injection_payloads_are_rejected_generically() {
        let mut s = valid_submission(0);
        s.desired_occupation = "{{constructor.constructor('alert(1)')()}}".into();
        assert_eq!(evaluate(&s, 60_000), GateResult::Reject(RejectReason::SuspiciousContent));

        // courseType is scanned too even though the user cannot edit it.
        let mut s = valid_submission(0);
        s.course_type = "<script>fetch('/x')</script>".into();
        assert_eq!(evaluate(&s, 60_000), GateResult::Reject(RejectReason::SuspiciousContent));
    }

    #[test]
    fn clean_human_submission_is_allowed_with_sanitized_fields() {
        let mut s = valid_submission(0);
        s.full_name = "  Maija   Virtanen ".into();
        s.email = " Maija@Example.COM ".into();
        match evaluate(&s, 12_000) {
            GateResult::Allow(fields) => {
                assert_eq!(fields.full_name, "Maija Virtanen");
                assert_eq!(fields.email, "maija@example.com");
            }
            other => panic!("expected Allow, got {other:?}"),
        }
    }

    #[test]
    fn bot_reasons_share_a_generic_message() {
        assert_eq!(
            RejectReason::HoneypotFilled.user_message(),
            RejectReason::SequentialFill.user_message()
        );
        assert_ne!(
            RejectReason::HoneypotFilled.user_message(),
            RejectReason::SuspiciousContent.user_message()
        );
    }
}
