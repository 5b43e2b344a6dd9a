use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <style>
                {r#"
                .faq-page {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    color: #fff;
                }
                .faq-page h1 {
                    font-size: 2.2rem;
                    margin-bottom: 0.5rem;
                }
                .faq-page .subtitle {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 2.5rem;
                }
                .faq-page h2 {
                    font-size: 1.4rem;
                    margin: 2.5rem 0 1rem;
                    color: #5EBEA4;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    padding: 1rem 0;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-answer {
                    display: none;
                    color: rgba(255, 255, 255, 0.75);
                    padding-bottom: 1rem;
                }
                .faq-item.open .faq-answer {
                    display: block;
                }
                .toggle-icon {
                    color: #5EBEA4;
                    font-size: 1.3rem;
                }
                "#}
            </style>

            <h1>{"Frequently Asked Questions"}</h1>
            <p class="subtitle">{"Everything you need to know before enrolling at Opintie"}</p>

            <h2>{"Enrollment"}</h2>

            <FaqItem question="How do I enroll in a course?">
                <p>
                    {"Pick a course on the Courses page, press Enroll and fill in the short form. We confirm your spot by email within two working days. There is no account to create and nothing to pay at this point."}
                </p>
            </FaqItem>

            <FaqItem question="Why does the form ask about my job situation?">
                <p>
                    {"Many of our students take courses as part of a career change, and some are entitled to employment-office funding for retraining. Knowing your current situation and where you want to end up helps us point you to the right course level and, where it applies, the right funding paperwork."}
                </p>
            </FaqItem>

            <FaqItem question="I submitted the form but got an error. What now?">
                <p>
                    {"First just try again; a slow connection is the most common cause. If the form keeps refusing your details, check that your name and phone number are written the ordinary way. If it still fails, email us at hello@opintie.fi and we'll enroll you by hand."}
                </p>
            </FaqItem>

            <FaqItem question="Can I cancel after enrolling?">
                <p>
                    {"Yes. Enrollment is binding only after you've paid for the course, which happens after the first lesson. Up to that point one email is enough to cancel."}
                </p>
            </FaqItem>

            <h2>{"Courses"}</h2>

            <FaqItem question="Do I need my own instrument or equipment?">
                <p>
                    {"For piano and sound engineering courses all the gear is at the studio. For music production we recommend a laptop that can run a DAW; we have loaners for the first weeks. Language courses need nothing but you."}
                </p>
            </FaqItem>

            <FaqItem question="What if my level doesn't match the course?">
                <p>
                    {"The first lesson doubles as a level check. If the course is clearly too easy or too hard, we move you to a better-fitting group at no cost, or refund you if there isn't one."}
                </p>
            </FaqItem>

            <FaqItem question="Are courses available remotely?">
                <p>
                    {"Language courses run both in Tampere and online. Music courses are in-person, except music production theory evenings which are streamed."}
                </p>
            </FaqItem>
        </div>
    }
}
