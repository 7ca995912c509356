//! Contact details and the consult request form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission is intercepted and handed to the `ContactEndpoint` from context.
//! The form itself never talks to the network and does not validate input.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::layout::Container;
use crate::config::BRAND;
use crate::contact::{ContactEndpoint, ContactForm};
use crate::content::IconName;

#[component]
pub fn ContactSection() -> impl IntoView {
    let endpoint = expect_context::<ContactEndpoint>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(err) = endpoint.submit(&form) {
            log::debug!("contact form left unchanged after failed submission: {err}");
        }
    };

    view! {
        <section class="contact">
            <Container class="contact__inner">
                <div class="contact__intro">
                    <h3>"Let’s talk"</h3>
                    <p>"Tell us about your startup and goals. We’ll propose a fast, focused plan."</p>
                    <div class="contact__details">
                        <div class="contact__detail">
                            <Icon name=IconName::Phone/>
                            {BRAND.phone}
                        </div>
                        <div class="contact__detail">
                            <Icon name=IconName::Mail/>
                            {BRAND.email}
                        </div>
                        <div class="contact__detail">
                            <Icon name=IconName::MapPin/>
                            {BRAND.location}
                        </div>
                    </div>
                </div>
                <form class="contact-form" on:submit=on_submit>
                    <label class="contact-form__field">
                        "Name"
                        <input
                            class="contact-form__input"
                            placeholder="Your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="contact-form__field">
                        "Email"
                        <input
                            class="contact-form__input"
                            placeholder="name@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="contact-form__field">
                        "Company"
                        <input
                            class="contact-form__input"
                            placeholder="Startup name"
                            prop:value=move || company.get()
                            on:input=move |ev| company.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="contact-form__field">
                        "How can we help?"
                        <textarea
                            class="contact-form__input contact-form__input--message"
                            placeholder="Describe your needs"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button
                        class="button"
                        type="submit"
                        style=format!("background: {}; color: white", BRAND.palette.green)
                    >
                        "Send message"
                    </button>
                </form>
            </Container>
        </section>
    }
}
