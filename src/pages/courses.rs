use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::enrollment_modal::EnrollmentModal;

#[derive(Clone, Copy, PartialEq)]
pub struct Course {
    pub course_type: &'static str,
    pub title: &'static str,
    pub track: &'static str,
    pub level: &'static str,
    pub blurb: &'static str,
}

pub const COURSES: &[Course] = &[
    Course {
        course_type: "music-production",
        title: "Music Production Fundamentals",
        track: "Music",
        level: "Beginner",
        blurb: "From first beat to finished track. DAW basics, arrangement, mixing and a portfolio piece you can actually show people.",
    },
    Course {
        course_type: "sound-engineering",
        title: "Live Sound Engineering",
        track: "Music",
        level: "Intermediate",
        blurb: "Signal flow, mixing consoles, stage setups. Taught with real venue gear and ends with you mixing a live gig.",
    },
    Course {
        course_type: "piano-beginner",
        title: "Piano from Zero",
        track: "Music",
        level: "Beginner",
        blurb: "No sheet music background needed. Weekly small-group lessons plus practice material you work through at your own pace.",
    },
    Course {
        course_type: "vocal-coaching",
        title: "Vocal Coaching",
        track: "Music",
        level: "All levels",
        blurb: "Technique, breath support and confidence, whether you sing in a band or just want to stop dreading karaoke.",
    },
    Course {
        course_type: "english-work-b2",
        title: "English for Work (B2)",
        track: "Language",
        level: "Intermediate",
        blurb: "Meetings, emails, negotiations. Built for people switching to international teams or customer-facing roles.",
    },
    Course {
        course_type: "spanish-a1",
        title: "Spanish Starter (A1)",
        track: "Language",
        level: "Beginner",
        blurb: "Conversational from day one. Two evenings a week, small groups, native-speaker teachers.",
    },
    Course {
        course_type: "german-a2",
        title: "German Continuation (A2)",
        track: "Language",
        level: "Elementary",
        blurb: "Picks up where a beginner course left off. Focus on speaking and the grammar you actually need, nothing more.",
    },
    Course {
        course_type: "finnish-for-professionals",
        title: "Finnish for Professionals",
        track: "Language",
        level: "Intermediate",
        blurb: "Workplace Finnish for internationals already living here. Industry vocabulary tailored to your field.",
    },
];

#[function_component(Courses)]
pub fn courses() -> Html {
    let enrolling = use_state(|| None::<&'static Course>);

    let onclick_enroll = |course: &'static Course| {
        let enrolling = enrolling.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            enrolling.set(Some(course));
        })
    };

    let on_close = {
        let enrolling = enrolling.clone();
        Callback::from(move |_| {
            enrolling.set(None);
        })
    };

    html! {
        <div class="courses-page">
            <style>
                {r#"
                .courses-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                }
                .courses-page h1 {
                    color: #fff;
                    font-size: 2.2rem;
                    margin-bottom: 0.5rem;
                }
                .courses-page .intro {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 2.5rem;
                    max-width: 600px;
                }
                .course-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .course-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(94, 190, 164, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                }
                .course-card .meta {
                    color: #5EBEA4;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 0.5rem;
                }
                .course-card h3 {
                    color: #fff;
                    margin: 0 0 0.7rem 0;
                }
                .course-card p {
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 0.95rem;
                    flex-grow: 1;
                }
                .course-card .enroll-button {
                    margin-top: 1.2rem;
                    padding: 0.7rem 1.4rem;
                    border: none;
                    border-radius: 8px;
                    background: #5EBEA4;
                    color: #101010;
                    font-weight: 600;
                    cursor: pointer;
                    align-self: flex-start;
                }
                .course-card .enroll-button:hover {
                    background: #74d1b8;
                }
                "#}
            </style>

            <h1>{"Courses"}</h1>
            <p class="intro">
                {"Evening and weekend courses in music and languages, taught in small groups in Tampere and online. Enroll below and we'll get back to you within two working days."}
            </p>

            <div class="course-grid">
                {
                    COURSES.iter().map(|course| html! {
                        <div class="course-card" key={course.course_type}>
                            <div class="meta">{course.track}{" · "}{course.level}</div>
                            <h3>{course.title}</h3>
                            <p>{course.blurb}</p>
                            <button class="enroll-button" onclick={onclick_enroll(course)}>
                                {"Enroll"}
                            </button>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            {
                if let Some(course) = *enrolling {
                    html! {
                        <EnrollmentModal
                            course_type={course.course_type.to_string()}
                            course_title={course.title.to_string()}
                            on_close={on_close}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
