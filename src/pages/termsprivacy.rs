use yew::prelude::*;

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    color: rgba(255, 255, 255, 0.85);
                }
                .legal-page h1 {
                    color: #fff;
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                }
                .legal-page h2 {
                    color: #5EBEA4;
                    font-size: 1.2rem;
                    margin: 2rem 0 0.7rem;
                }
                .legal-page p {
                    line-height: 1.6;
                }
                "#}
            </style>

            <h1>{"Terms of Service"}</h1>

            <h2>{"Enrollment"}</h2>
            <p>
                {"Submitting the enrollment form reserves you a provisional place on a course. The reservation becomes a binding enrollment only once we have confirmed it by email and you have attended the first lesson and paid the course fee."}
            </p>

            <h2>{"Payment and cancellation"}</h2>
            <p>
                {"Course fees are invoiced after the first lesson. You may cancel free of charge at any point before payment by emailing hello@opintie.fi. After payment, cancellations are refunded pro rata for lessons not yet held, minus a 20 € administration fee."}
            </p>

            <h2>{"Course changes"}</h2>
            <p>
                {"We may cancel a course that does not reach its minimum group size, in which case anything you have paid is refunded in full. Individual lessons may be rescheduled with at least 48 hours notice."}
            </p>

            <h2>{"Liability"}</h2>
            <p>
                {"Opintie is not liable for indirect damages. Our total liability is limited to the course fee paid. Instruments and equipment borrowed from us must be returned in the condition they were lent in, normal wear excepted."}
            </p>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    color: rgba(255, 255, 255, 0.85);
                }
                .legal-page h1 {
                    color: #fff;
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                }
                .legal-page h2 {
                    color: #5EBEA4;
                    font-size: 1.2rem;
                    margin: 2rem 0 0.7rem;
                }
                .legal-page p {
                    line-height: 1.6;
                }
                "#}
            </style>

            <h1>{"Privacy Policy"}</h1>

            <h2>{"What we collect"}</h2>
            <p>
                {"When you enroll we collect your name, email address, phone number, and what you told us about your current and desired occupation. We use these only to process your enrollment, contact you about the course, and, where you asked for it, prepare retraining-funding paperwork."}
            </p>

            <h2>{"Spam prevention"}</h2>
            <p>
                {"The enrollment form records basic interaction signals, such as how long the form was open before it was submitted, to tell human enrollments apart from automated spam. These signals are sent with your enrollment and are not used for anything else."}
            </p>

            <h2>{"Storage and retention"}</h2>
            <p>
                {"Enrollment emails are kept for the duration of the course and for one year afterwards for bookkeeping, then deleted. We do not sell or share your details with anyone outside Opintie, except invoicing data to our accounting provider as required by law."}
            </p>

            <h2>{"Your rights"}</h2>
            <p>
                {"You can ask for a copy of the data we hold about you, or ask us to delete it, by emailing hello@opintie.fi. Deletion requests are honored unless bookkeeping law requires us to keep invoicing records."}
            </p>
        </div>
    }
}
