use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::config;
use crate::reveal::{reveal_classes, use_section_reveal};

struct InfoItem {
    icon: &'static str,
    label: &'static str,
    lines: &'static [&'static str],
}

const INFO: &[InfoItem] = &[
    InfoItem {
        icon: "📞",
        label: "Telefones",
        lines: &["(19) 3621-4061", "(19) 99137-1808"],
    },
    InfoItem {
        icon: "✉",
        label: "E-mail",
        lines: &[config::LEAD_INBOX],
    },
    InfoItem {
        icon: "📍",
        label: "Endereço",
        lines: &["Americana, SP"],
    },
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let (node, revealed) = use_section_reveal();

    html! {
        <section id="contato" class="contact-section" ref={node}>
            <div class="section-container">
                <div class={classes!("section-header", reveal_classes(revealed))}>
                    <h2>{"Entre em Contato"}</h2>
                    <p>{"Solicite sua cotação ou tire suas dúvidas."}</p>
                </div>
                <div class={classes!("contact-grid", reveal_classes(revealed))} style="transition-delay: 200ms;">
                    <LeadForm />
                    <div class="contact-info">
                        { for INFO.iter().map(|item| html! {
                            <div key={item.label} class="info-item">
                                <div class="info-icon">{item.icon}</div>
                                <div>
                                    <p class="info-label">{item.label}</p>
                                    { for item.lines.iter().map(|line| html! { <p key={*line} class="info-line">{*line}</p> }) }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
