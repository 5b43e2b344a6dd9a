use serde::{Deserialize, Serialize};

// Field names as they appear top-to-bottom in the modal markup. The gate
// compares the recorded focus order against this list.
pub const CANONICAL_FIELD_ORDER: [&str; 5] = [
    "fullName",
    "email",
    "phoneNumber",
    "currentJobStatus",
    "desiredOccupation",
];

/// One form session's worth of state, snapshotted for the gate. Created
/// fresh every time the enrollment modal mounts and thrown away on close.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct EnrollmentSubmission {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub current_job_status: String,
    pub desired_occupation: String,
    pub course_type: String,
    pub honeypot_value: String,
    pub form_opened_at_ms: i64,
    pub has_interacted: bool,
    pub field_fill_order: Vec<String>,
}

impl EnrollmentSubmission {
    pub fn new(course_type: String, opened_at_ms: i64) -> Self {
        Self {
            course_type,
            form_opened_at_ms: opened_at_ms,
            ..Self::default()
        }
    }

    pub fn elapsed_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.form_opened_at_ms
    }

    /// First focus on a field marks the session as interacted-with and
    /// appends the field to the fill order, once per field.
    pub fn record_focus(&mut self, field: &str) {
        self.has_interacted = true;
        if !self.field_fill_order.iter().any(|f| f == field) {
            self.field_fill_order.push(field.to_string());
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    /// Idle -> Submitting -> Succeeded | Failed; Failed may resubmit, and
    /// gate rejections move to Failed without ever reaching Submitting.
    /// Succeeded is terminal for the modal instance.
    pub fn can_transition_to(self, next: SubmitStatus) -> bool {
        matches!(
            (self, next),
            (SubmitStatus::Idle, SubmitStatus::Submitting)
                | (SubmitStatus::Idle, SubmitStatus::Failed)
                | (SubmitStatus::Submitting, SubmitStatus::Succeeded)
                | (SubmitStatus::Submitting, SubmitStatus::Failed)
                | (SubmitStatus::Failed, SubmitStatus::Submitting)
                | (SubmitStatus::Failed, SubmitStatus::Failed)
        )
    }
}

/// Body POSTed to the enrollment endpoint. Field names follow the backend
/// contract, including the literal `_honeypot` telemetry key.
#[derive(Serialize, Debug, PartialEq)]
pub struct EnrollmentRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "currentJobStatus")]
    pub current_job_status: String,
    #[serde(rename = "desiredOccupation")]
    pub desired_occupation: String,
    #[serde(rename = "courseType")]
    pub course_type: String,
    #[serde(rename = "_honeypot")]
    pub honeypot: HoneypotTelemetry,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct HoneypotTelemetry {
    pub website: String,
    #[serde(rename = "timeSpent")]
    pub time_spent: i64,
    #[serde(rename = "userInteracted")]
    pub user_interacted: bool,
    #[serde(rename = "fieldFillOrder")]
    pub field_fill_order: Vec<String>,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while sending your enrollment. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the enrollment service. Please check your connection and try again.";

/// Picks the user-facing text for a non-OK response: the server's message
/// verbatim when it sent one, generic otherwise.
pub fn server_failure_message(body_message: Option<String>) -> String {
    match body_message {
        Some(message) if !message.trim().is_empty() => message,
        _ => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_focus_tracks_interaction_and_order_once() {
        let mut s = EnrollmentSubmission::new("piano-beginner".into(), 0);
        assert!(!s.has_interacted);
        s.record_focus("email");
        s.record_focus("fullName");
        s.record_focus("email");
        assert!(s.has_interacted);
        assert_eq!(s.field_fill_order, vec!["email", "fullName"]);
    }

    #[test]
    fn fill_order_never_exceeds_tracked_fields() {
        let mut s = EnrollmentSubmission::new("piano-beginner".into(), 0);
        for _ in 0..3 {
            for field in CANONICAL_FIELD_ORDER {
                s.record_focus(field);
            }
        }
        assert_eq!(s.field_fill_order.len(), CANONICAL_FIELD_ORDER.len());
    }

    #[test]
    fn status_transitions_follow_the_lifecycle() {
        use SubmitStatus::*;
        assert!(Idle.can_transition_to(Submitting));
        assert!(Idle.can_transition_to(Failed)); // gate rejection, no dispatch
        assert!(Submitting.can_transition_to(Succeeded));
        assert!(Submitting.can_transition_to(Failed));
        assert!(Failed.can_transition_to(Submitting));
        assert!(Failed.can_transition_to(Failed));
        assert!(!Succeeded.can_transition_to(Submitting));
        assert!(!Succeeded.can_transition_to(Failed));
        assert!(!Idle.can_transition_to(Succeeded));
        assert!(!Submitting.can_transition_to(Submitting));
    }

    #[test]
    fn request_body_matches_the_wire_contract() {
        let request = EnrollmentRequest {
            full_name: "Maija Virtanen".into(),
            email: "maija@example.com".into(),
            phone_number: "+358451234567".into(),
            current_job_status: "Studying".into(),
            desired_occupation: "Sound engineer".into(),
            course_type: "music-production".into(),
            honeypot: HoneypotTelemetry {
                website: String::new(),
                time_spent: 12_000,
                user_interacted: true,
                field_fill_order: vec!["email".into(), "fullName".into()],
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fullName"], "Maija Virtanen");
        assert_eq!(value["phoneNumber"], "+358451234567");
        assert_eq!(value["courseType"], "music-production");
        assert_eq!(value["_honeypot"]["timeSpent"], 12_000);
        assert_eq!(value["_honeypot"]["userInteracted"], true);
        assert_eq!(value["_honeypot"]["fieldFillOrder"][0], "email");
    }

    #[test]
    fn server_message_is_shown_verbatim_when_present() {
        assert_eq!(
            server_failure_message(Some("Duplicate submission".into())),
            "Duplicate submission"
        );
        assert_eq!(server_failure_message(Some("   ".into())), GENERIC_FAILURE_MESSAGE);
        assert_eq!(server_failure_message(None), GENERIC_FAILURE_MESSAGE);
    }
}
