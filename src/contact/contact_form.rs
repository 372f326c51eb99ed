//! The contact form component: blur-validated fields, one submission at a
//! time, outcome reported through the notification callback.

use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FocusEvent, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::notification::NotificationKind;

use super::form::{FieldState, FormState, SubmitBlocked};
use super::transport::Transport;
use super::validation::FieldKind;

const SUCCESS_MESSAGE: &str = "Thank you! We'll be in touch within 2 hours.";

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Phone => "tel",
        FieldKind::Url => "url",
        FieldKind::Text => "text",
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps<T>
where
    T: Transport + Clone + PartialEq + 'static,
{
    pub transport: T,
    pub notify: Callback<(String, NotificationKind)>,
}

#[function_component(ContactForm)]
pub fn contact_form<T>(props: &ContactFormProps<T>) -> Html
where
    T: Transport + Clone + PartialEq + 'static,
{
    let form = use_state(FormState::new);

    let onsubmit = {
        let form = form.clone();
        let notify = props.notify.clone();
        let transport = props.transport.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.begin_submission() {
                Ok(payload) => {
                    form.set(next.clone());
                    let form = form.clone();
                    let notify = notify.clone();
                    let transport = transport.clone();
                    spawn_local(async move {
                        if let Err(err) = transport.submit(payload).await {
                            // the simulated backend never takes this branch
                            log!(format!("contact submission failed: {err}"));
                        }
                        next.complete_submission();
                        form.set(next);
                        notify.emit((SUCCESS_MESSAGE.to_string(), NotificationKind::Success));
                    });
                }
                // annotations were applied by the failed validation pass
                Err(SubmitBlocked::Invalid) => form.set(next),
                // the button is disabled while submitting, but a programmatic
                // submit must not start a second round trip
                Err(SubmitBlocked::InFlight) => {}
            }
        })
    };

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit}>
            { for form.fields().iter().map(|field| render_field(field, &form)) }
            <button type="submit" class="btn btn-cta" disabled={form.is_submitting()}>
                { if form.is_submitting() { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

fn render_field(field: &FieldState, form: &UseStateHandle<FormState>) -> Html {
    let name = field.spec.name;
    let multiline = field.spec.multiline;

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = if multiline {
                e.target_unchecked_into::<HtmlTextAreaElement>().value()
            } else {
                e.target_unchecked_into::<HtmlInputElement>().value()
            };
            let mut next = (*form).clone();
            next.set_value(name, value);
            form.set(next);
        })
    };

    let onblur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.validate_field(name);
            form.set(next);
        })
    };

    let class = classes!(field.error.is_some().then_some("error"));

    html! {
        <div class="form-group">
            <label for={name}>
                { field.spec.label }
                { if field.spec.required { " *" } else { "" } }
            </label>
            if multiline {
                <textarea
                    id={name}
                    name={name}
                    rows="5"
                    placeholder={field.spec.placeholder}
                    value={field.value.clone()}
                    class={class}
                    {oninput}
                    {onblur}
                />
            } else {
                <input
                    id={name}
                    name={name}
                    type={input_type(field.spec.kind)}
                    placeholder={field.spec.placeholder}
                    value={field.value.clone()}
                    class={class}
                    {oninput}
                    {onblur}
                />
            }
            if let Some(error) = field.error {
                <div class="field-error">{ error.message() }</div>
            }
        </div>
    }
}
