use yew::prelude::*;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FocusEvent, HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use chrono::Utc;

use crate::config;
use crate::enroll::gate::{evaluate, GateResult};
use crate::enroll::submission::{
    server_failure_message, EnrollmentRequest, EnrollmentSubmission, ErrorResponse,
    HoneypotTelemetry, SubmitStatus, GENERIC_FAILURE_MESSAGE, NETWORK_ERROR_MESSAGE,
};

// How long the success state stays on screen before the modal closes itself.
const SUCCESS_CLOSE_DELAY_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct EnrollmentModalProps {
    pub course_type: String,
    pub course_title: String,
    pub on_close: Callback<()>,
}

#[function_component(EnrollmentModal)]
pub fn enrollment_modal(props: &EnrollmentModalProps) -> Html {
    // One fresh submission session per modal mount; the open timestamp is
    // captured exactly once and never rewritten.
    let submission = {
        let course_type = props.course_type.clone();
        use_state(|| EnrollmentSubmission::new(course_type, Utc::now().timestamp_millis()))
    };
    let status = use_state(|| SubmitStatus::Idle);
    let error = use_state(|| None::<String>);

    let oninput_field = |setter: fn(&mut EnrollmentSubmission, String)| {
        let submission = submission.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*submission).clone();
            setter(&mut next, input.value());
            submission.set(next);
        })
    };

    let onfocus_field = |field: &'static str| {
        let submission = submission.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*submission).clone();
            next.record_focus(field);
            submission.set(next);
        })
    };

    let oninput_full_name = oninput_field(|s, v| s.full_name = v);
    let oninput_email = oninput_field(|s, v| s.email = v);
    let oninput_phone = oninput_field(|s, v| s.phone_number = v);
    let oninput_job_status = oninput_field(|s, v| s.current_job_status = v);
    let oninput_occupation = oninput_field(|s, v| s.desired_occupation = v);
    let oninput_honeypot = oninput_field(|s, v| s.honeypot_value = v);

    let onsubmit = {
        let submission = submission.clone();
        let status = status.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // In-flight or already-succeeded sessions ignore further clicks.
            if !status.can_transition_to(SubmitStatus::Submitting) {
                return;
            }

            let snapshot = (*submission).clone();
            let now_ms = Utc::now().timestamp_millis();
            let fields = match evaluate(&snapshot, now_ms) {
                GateResult::Allow(fields) => fields,
                GateResult::Reject(reason) => {
                    log!("enrollment rejected before dispatch");
                    status.set(SubmitStatus::Failed);
                    error.set(Some(reason.user_message()));
                    return;
                }
            };

            status.set(SubmitStatus::Submitting);
            error.set(None);

            let body = EnrollmentRequest {
                full_name: fields.full_name,
                email: fields.email,
                phone_number: fields.phone_number,
                current_job_status: fields.current_job_status,
                desired_occupation: fields.desired_occupation,
                course_type: snapshot.course_type.clone(),
                honeypot: HoneypotTelemetry {
                    website: snapshot.honeypot_value.clone(),
                    time_spent: snapshot.elapsed_ms(now_ms),
                    user_interacted: snapshot.has_interacted,
                    field_fill_order: snapshot.field_fill_order.clone(),
                },
            };

            let status = status.clone();
            let error = error.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let request = match Request::post(&format!("{}/api/enroll", config::get_backend_url()))
                    .header("Content-Type", "application/json")
                    .json(&body)
                {
                    Ok(request) => request,
                    Err(e) => {
                        log!("failed to build enrollment request:", e.to_string());
                        status.set(SubmitStatus::Failed);
                        error.set(Some(GENERIC_FAILURE_MESSAGE.to_string()));
                        return;
                    }
                };

                match request.send().await {
                    Ok(response) => {
                        if response.ok() {
                            log!("enrollment submitted");
                            status.set(SubmitStatus::Succeeded);
                            let on_close = on_close.clone();
                            Timeout::new(SUCCESS_CLOSE_DELAY_MS, move || {
                                on_close.emit(());
                            })
                            .forget();
                        } else {
                            log!("enrollment failed with status:", response.status());
                            let message = match response.json::<ErrorResponse>().await {
                                Ok(body) => server_failure_message(body.message),
                                Err(_) => GENERIC_FAILURE_MESSAGE.to_string(),
                            };
                            status.set(SubmitStatus::Failed);
                            error.set(Some(message));
                        }
                    }
                    Err(e) => {
                        log!("enrollment network error:", e.to_string());
                        status.set(SubmitStatus::Failed);
                        error.set(Some(NETWORK_ERROR_MESSAGE.to_string()));
                    }
                }
            });
        })
    };

    let onclick_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let onclick_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let stop_propagation = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let submitting = *status == SubmitStatus::Submitting;

    html! {
        <div class="enrollment-backdrop" onclick={onclick_backdrop}>
            <style>
                {r#"
                .enrollment-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(10, 10, 10, 0.75);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    z-index: 100;
                }
                .enrollment-modal {
                    background: rgba(30, 30, 30, 0.95);
                    border: 1px solid rgba(94, 190, 164, 0.2);
                    border-radius: 16px;
                    padding: 2.5rem;
                    width: 100%;
                    max-width: 520px;
                    max-height: 90vh;
                    overflow-y: auto;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                }
                .enrollment-modal h2 {
                    margin: 0 0 0.5rem 0;
                    color: #fff;
                    font-size: 1.5rem;
                }
                .enrollment-modal .course-name {
                    color: #5EBEA4;
                    font-size: 0.95rem;
                    margin-bottom: 1.5rem;
                }
                .enrollment-modal label {
                    display: block;
                    color: rgba(255, 255, 255, 0.85);
                    font-size: 0.9rem;
                    margin: 1rem 0 0.3rem;
                }
                .enrollment-modal input {
                    width: 100%;
                    padding: 0.7rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font-size: 1rem;
                    box-sizing: border-box;
                }
                .enrollment-modal .website-field {
                    position: absolute;
                    left: -9999px;
                    opacity: 0;
                    height: 0;
                    overflow: hidden;
                }
                .enrollment-modal .submit-button {
                    margin-top: 1.5rem;
                    width: 100%;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 8px;
                    background: #5EBEA4;
                    color: #101010;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .enrollment-modal .submit-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .enrollment-modal .close-button {
                    float: right;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 1.3rem;
                    cursor: pointer;
                }
                .enrollment-error {
                    color: #ff7b7b;
                    margin-top: 1rem;
                    font-size: 0.9rem;
                }
                .enrollment-success {
                    color: #7bd39a;
                    margin-top: 1rem;
                    font-size: 0.95rem;
                }
                "#}
            </style>
            <div class="enrollment-modal" onclick={stop_propagation}>
                <button class="close-button" onclick={onclick_close}>{"×"}</button>
                <h2>{"Enroll"}</h2>
                <p class="course-name">{&props.course_title}</p>

                <form onsubmit={onsubmit}>
                    <label for="fullName">{"Full name"}</label>
                    <input
                        id="fullName"
                        type="text"
                        value={submission.full_name.clone()}
                        oninput={oninput_full_name}
                        onfocus={onfocus_field("fullName")}
                        maxlength="100"
                        required=true
                    />

                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        value={submission.email.clone()}
                        oninput={oninput_email}
                        onfocus={onfocus_field("email")}
                        maxlength="254"
                        required=true
                    />

                    <label for="phoneNumber">{"Phone number"}</label>
                    <input
                        id="phoneNumber"
                        type="tel"
                        value={submission.phone_number.clone()}
                        oninput={oninput_phone}
                        onfocus={onfocus_field("phoneNumber")}
                        maxlength="25"
                        required=true
                    />

                    <label for="currentJobStatus">{"Current job status"}</label>
                    <input
                        id="currentJobStatus"
                        type="text"
                        value={submission.current_job_status.clone()}
                        oninput={oninput_job_status}
                        onfocus={onfocus_field("currentJobStatus")}
                        maxlength="100"
                        required=true
                    />

                    <label for="desiredOccupation">{"Desired occupation"}</label>
                    <input
                        id="desiredOccupation"
                        type="text"
                        value={submission.desired_occupation.clone()}
                        oninput={oninput_occupation}
                        onfocus={onfocus_field("desiredOccupation")}
                        maxlength="100"
                        required=true
                    />

                    // Honeypot: hidden from sighted users, present in markup.
                    <div class="website-field" aria-hidden="true">
                        <label for="website">{"Website"}</label>
                        <input
                            id="website"
                            type="text"
                            value={submission.honeypot_value.clone()}
                            oninput={oninput_honeypot}
                            tabindex="-1"
                            autocomplete="off"
                        />
                    </div>

                    <button class="submit-button" type="submit" disabled={submitting}>
                        {
                            match *status {
                                SubmitStatus::Submitting => "Sending...",
                                SubmitStatus::Succeeded => "Enrolled!",
                                _ => "Send enrollment",
                            }
                        }
                    </button>
                </form>

                {
                    if *status == SubmitStatus::Succeeded {
                        html! {
                            <p class="enrollment-success">
                                {"Thanks! We received your enrollment and will be in touch by email."}
                            </p>
                        }
                    } else if let Some(message) = (*error).as_ref() {
                        html! { <p class="enrollment-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
