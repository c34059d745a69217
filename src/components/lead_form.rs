use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::lead::dispatch::{Dispatch, WebDispatcher};
use crate::lead::feedback::{FeedbackKind, FeedbackTicket};
use crate::lead::form::Field;
use crate::lead::submission::{Shown, SubmitStep, Submission};

pub enum LeadFormMsg {
    Edit(Field, String),
    Submit,
    Dispatched(Dispatch),
    ExpireFeedback(FeedbackTicket),
}

pub struct LeadForm {
    submission: Submission,
    // Dropping the handle cancels the pending clear.
    feedback_timer: Option<Timeout>,
    dispatcher: Rc<WebDispatcher>,
}

impl LeadForm {
    fn schedule_clear(&mut self, ctx: &Context<Self>, shown: Shown) {
        let link = ctx.link().clone();
        self.feedback_timer = Some(Timeout::new(shown.lifetime_ms, move || {
            link.send_message(LeadFormMsg::ExpireFeedback(shown.ticket));
        }));
    }

    fn input(&self, ctx: &Context<Self>, field: Field, placeholder: &'static str, kind: &'static str) -> Html {
        html! {
            <input
                class="lead-input"
                type={kind}
                placeholder={placeholder}
                value={self.submission.form().get(field).to_string()}
                maxlength={field.max_len().to_string()}
                required={matches!(field, Field::Name | Field::Phone)}
                oninput={ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    LeadFormMsg::Edit(field, input.value())
                })}
            />
        }
    }
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            submission: Submission::default(),
            feedback_timer: None,
            dispatcher: Rc::new(WebDispatcher::for_site()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::Edit(field, value) => {
                self.submission.edit(field, &value);
                true
            }
            LeadFormMsg::Submit => {
                if self.dispatcher.is_sending() {
                    return false;
                }
                match self.submission.submit() {
                    SubmitStep::Ignored => false,
                    SubmitStep::Rejected(shown) => {
                        info!("Lead rejected: name or phone missing");
                        self.schedule_clear(ctx, shown);
                        true
                    }
                    SubmitStep::Send(lead) => {
                        let dispatcher = self.dispatcher.clone();
                        ctx.link().send_future(async move {
                            LeadFormMsg::Dispatched(dispatcher.dispatch(lead).await)
                        });
                        true
                    }
                }
            }
            LeadFormMsg::Dispatched(dispatch) => {
                if let Some(shown) = self.submission.dispatched(dispatch) {
                    self.schedule_clear(ctx, shown);
                }
                true
            }
            LeadFormMsg::ExpireFeedback(ticket) => {
                let changed = self.submission.expire(ticket);
                if changed {
                    self.feedback_timer = None;
                }
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });

        html! {
            <form class="lead-form" {onsubmit}>
                { self.input(ctx, Field::Name, "Seu nome", "text") }
                { self.input(ctx, Field::Phone, "Telefone", "tel") }
                { self.input(ctx, Field::Vehicle, "Tipo de veículo", "text") }
                <textarea
                    class="lead-input"
                    placeholder="Sua mensagem (opcional)"
                    rows="4"
                    value={self.submission.form().get(Field::Message).to_string()}
                    maxlength={Field::Message.max_len().to_string()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        LeadFormMsg::Edit(Field::Message, input.value())
                    })}
                />
                <button type="submit" class="lead-submit" disabled={self.submission.is_sending()}>
                    { if self.submission.is_sending() { "Enviando..." } else { "Enviar pelo WhatsApp" } }
                </button>
                if let Some(feedback) = self.submission.feedback() {
                    <div class={classes!(
                        "lead-feedback",
                        match feedback.kind {
                            FeedbackKind::Error => "error",
                            FeedbackKind::Success => "success",
                        }
                    )}>
                        { &feedback.text }
                    </div>
                }
            </form>
        }
    }
}
