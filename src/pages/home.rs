use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::components::enrollment_modal::EnrollmentModal;
use crate::pages::courses::{Course, COURSES};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
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

    // The three courses we currently want on the front page.
    let featured: Vec<&'static Course> = COURSES
        .iter()
        .filter(|c| {
            matches!(
                c.course_type,
                "music-production" | "english-work-b2" | "piano-beginner"
            )
        })
        .collect();

    html! {
        <div class="home-page">
            <style>
                {r#"
                .home-page {
                    color: #fff;
                }
                .hero {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 1.5rem 3rem;
                }
                .hero h1 {
                    font-size: 3rem;
                    max-width: 750px;
                    margin: 0 0 1rem 0;
                    background: linear-gradient(45deg, #fff, #5EBEA4);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero p {
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 1.15rem;
                    max-width: 560px;
                    margin-bottom: 2rem;
                }
                .hero .cta-button {
                    padding: 1rem 2.2rem;
                    border-radius: 8px;
                    background: #5EBEA4;
                    color: #101010;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-decoration: none;
                }
                .hero .cta-button:hover {
                    background: #74d1b8;
                }
                .home-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }
                .home-section h2 {
                    font-size: 1.8rem;
                    margin-bottom: 1.5rem;
                }
                .steps {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .step {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(94, 190, 164, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .step .step-number {
                    color: #5EBEA4;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin-bottom: 0.4rem;
                }
                .step p {
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 0.95rem;
                }
                .featured-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .featured-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(94, 190, 164, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                }
                .featured-card h3 {
                    margin: 0 0 0.6rem 0;
                }
                .featured-card p {
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 0.95rem;
                    flex-grow: 1;
                }
                .featured-card button {
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
                .all-courses-link {
                    display: inline-block;
                    margin-top: 2rem;
                    color: #5EBEA4;
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.1rem; }
                }
                "#}
            </style>

            <section class="hero">
                <h1>{"Learn a language. Learn an instrument. Change what you do for a living."}</h1>
                <p>
                    {"Opintie runs small-group evening courses in music and languages, built for working adults who want a real skill, not another abandoned app streak."}
                </p>
                <Link<Route> to={Route::Courses} classes="cta-button">
                    {"Browse courses"}
                </Link<Route>>
            </section>

            <section class="home-section">
                <h2>{"How it works"}</h2>
                <div class="steps">
                    <div class="step">
                        <div class="step-number">{"1"}</div>
                        <h3>{"Pick a course"}</h3>
                        <p>{"Music or language, beginner or continuing. Every course tells you up front how many evenings a week it takes."}</p>
                    </div>
                    <div class="step">
                        <div class="step-number">{"2"}</div>
                        <h3>{"Enroll in two minutes"}</h3>
                        <p>{"Fill in the short form and we confirm your spot by email. No account, no payment until the first lesson."}</p>
                    </div>
                    <div class="step">
                        <div class="step-number">{"3"}</div>
                        <h3>{"Show up and learn"}</h3>
                        <p>{"Groups of at most eight, teachers who do this for a living, and a clear goal for every course."}</p>
                    </div>
                </div>
            </section>

            <section class="home-section">
                <h2>{"Popular right now"}</h2>
                <div class="featured-grid">
                    {
                        featured.iter().map(|course| html! {
                            <div class="featured-card" key={course.course_type}>
                                <h3>{course.title}</h3>
                                <p>{course.blurb}</p>
                                <button onclick={onclick_enroll(*course)}>{"Enroll"}</button>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <Link<Route> to={Route::Courses} classes="all-courses-link">
                    {"See all courses →"}
                </Link<Route>>
            </section>

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
