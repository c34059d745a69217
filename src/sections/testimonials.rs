use yew::prelude::*;

use crate::reveal::{reveal_classes, use_section_reveal};

struct Testimonial {
    name: &'static str,
    text: &'static str,
    rating: u8,
    since: u16,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Maria S.",
        text: "Atendimento excelente! Me senti segura desde o primeiro contato. Recomendo a todos.",
        rating: 5,
        since: 2022,
    },
    Testimonial {
        name: "João P.",
        text: "Proteção veicular com o melhor custo-benefício da região. Equipe muito prestativa!",
        rating: 5,
        since: 2021,
    },
    Testimonial {
        name: "Ana C.",
        text: "Resolvi tudo pelo WhatsApp, super prático. Assistência 24h realmente funciona!",
        rating: 5,
        since: 2023,
    },
];

const STAGGER_MS: usize = 150;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let (node, revealed) = use_section_reveal();

    html! {
        <section class="testimonials-section" ref={node}>
            <div class="section-container">
                <div class={classes!("section-header", reveal_classes(revealed))}>
                    <h2>{"O que dizem nossos clientes"}</h2>
                    <p>{"A confiança dos nossos clientes é o nosso maior patrimônio."}</p>
                </div>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <div
                            key={t.name}
                            class={classes!("testimonial-card", reveal_classes(revealed))}
                            style={format!("transition-delay: {}ms;", i * STAGGER_MS)}
                        >
                            <div class="stars">
                                { for (0..t.rating).map(|_| html! { <span class="star">{"★"}</span> }) }
                            </div>
                            <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
                            <div class="testimonial-author">
                                <div class="avatar">{initials(t.name)}</div>
                                <div>
                                    <p class="author-name">{t.name}</p>
                                    <p class="author-since">{format!("Cliente desde {}", t.since)}</p>
                                </div>
                            </div>
                        </div>
                    }) }
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
    #[case("Maria S.", "MS")]
    #[case("joão p.", "JP")]
    #[case("  Ana   Clara  C. ", "ACC")]
    #[case("", "")]
    fn initials_take_the_first_letter_of_each_word(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(initials(name), expected);
    }

    #[test]
    fn ratings_fit_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
