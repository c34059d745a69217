use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::lead::whatsapp::WhatsAppLink;
use crate::reveal::{reveal_classes, use_section_reveal};

const HELP_MESSAGE: &str = "Olá! Ainda tenho dúvidas e gostaria de ajuda.";

const FAQS: &[(&str, &str)] = &[
    (
        "Qual a diferença entre seguro e proteção veicular?",
        "O seguro é oferecido por seguradoras regulamentadas pela SUSEP, enquanto a proteção veicular é oferecida por associações e cooperativas. Ambos protegem seu veículo, mas com estruturas diferentes. Nós trabalhamos com as duas modalidades.",
    ),
    (
        "A proteção veicular aceita veículos antigos?",
        "Sim! Uma das grandes vantagens da proteção veicular é aceitar veículos de qualquer ano, incluindo modelos antigos que normalmente são recusados por seguradoras.",
    ),
    (
        "Como funciona o rastreamento veicular?",
        "Instalamos um equipamento discreto no seu veículo que permite acompanhar sua localização em tempo real pelo celular. Em caso de furto ou roubo, a central 24h atua para recuperar o veículo.",
    ),
    (
        "Motoristas de aplicativo (Uber/99) podem contratar?",
        "Sim! Aceitamos motoristas de aplicativo sem restrições. A proteção veicular é ideal para quem roda muito e precisa de uma cobertura acessível.",
    ),
    (
        "O atendimento é realmente 24 horas?",
        "Sim! Oferecemos assistência 24h com atendimento humanizado. Você fala com pessoas reais, não com robôs.",
    ),
    (
        "Como solicitar uma cotação?",
        "É simples! Clique no botão 'Solicite uma Cotação' ou entre em contato pelo WhatsApp (19) 99137-1808. Respondemos rapidamente!",
    ),
];

/// Single-open accordion: clicking the open item collapses it, clicking
/// another one moves the focus there.
fn toggled(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{props.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let (node, revealed) = use_section_reveal();
    let open = use_state(|| None::<usize>);
    let help_url = WhatsAppLink::new(config::OFFICE_WHATSAPP_NUMBER).with_text(HELP_MESSAGE);

    html! {
        <section id="faq" class="faq-section" ref={node}>
            <div class="section-container narrow">
                <div class={classes!("section-header", reveal_classes(revealed))}>
                    <h2>{"Perguntas Frequentes"}</h2>
                    <p>{"Tire suas dúvidas sobre nossos serviços."}</p>
                </div>
                <div class={classes!("faq-list", reveal_classes(revealed))} style="transition-delay: 200ms;">
                    { for FAQS.iter().enumerate().map(|(i, (question, answer))| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_| open.set(toggled(*open, i)))
                        };
                        html! {
                            <FaqItem
                                key={i}
                                question={*question}
                                answer={*answer}
                                open={*open == Some(i)}
                                {on_toggle}
                            />
                        }
                    }) }
                </div>
                <div class={classes!("faq-cta", reveal_classes(revealed))} style="transition-delay: 400ms;">
                    <p>{"Ainda tem dúvidas?"}</p>
                    <a href={help_url} target="_blank" rel="noopener noreferrer" class="cta-button">
                        {"Fale Conosco"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 2, Some(2))]
    #[case(Some(2), 2, None)]
    #[case(Some(1), 4, Some(4))]
    fn accordion_keeps_at_most_one_item_open(
        #[case] current: Option<usize>,
        #[case] clicked: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(toggled(current, clicked), expected);
    }

    #[test]
    fn help_link_goes_to_the_office_line() {
        let url = WhatsAppLink::new(config::OFFICE_WHATSAPP_NUMBER).with_text(HELP_MESSAGE);
        assert!(url.starts_with("https://wa.me/551936214061?text=Ol%C3%A1%21"));
    }

    #[test]
    fn six_questions_are_listed() {
        assert_eq!(FAQS.len(), 6);
        assert!(FAQS.iter().all(|(q, a)| q.ends_with('?') && !a.is_empty()));
    }
}
