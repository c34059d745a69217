use yew::prelude::*;

use crate::sections::{contact::ContactSection, faq::FaqSection, testimonials::TestimonialsSection};

/// Element id named by a location hash such as `#contato`.
fn anchor_id(hash: &str) -> Option<&str> {
    hash.strip_prefix('#').filter(|id| !id.is_empty())
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // On mount: jump to the linked section if the URL has one, else to the top.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let hash = window.location().hash().unwrap_or_default();
                let target = anchor_id(&hash).and_then(|id| {
                    window.document().and_then(|doc| doc.get_element_by_id(id))
                });
                match target {
                    Some(section) => section.scroll_into_view(),
                    None => window.scroll_to_with_x_and_y(0.0, 0.0),
                }
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <TestimonialsSection />
            <FaqSection />
            <ContactSection />
            <footer class="site-footer">
                <p>{"Nardini Seguros · Americana, SP"}</p>
            </footer>
            <style>
                {r#"
                .landing-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #1f2a44;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .section-container {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1rem;
                }
                .section-container.narrow {
                    max-width: 760px;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 3.5rem;
                }
                .section-header h2 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    color: #1f2a44;
                    margin-bottom: 1rem;
                }
                .section-header p {
                    color: #64748b;
                    font-size: 1.1rem;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 700ms ease, transform 700ms ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .testimonial-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                    border: 1px solid rgba(31, 42, 68, 0.08);
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                }
                .star {
                    color: #22a45d;
                    font-size: 1.2rem;
                    margin-right: 2px;
                }
                .testimonial-text {
                    color: #64748b;
                    font-style: italic;
                    line-height: 1.6;
                    margin: 1rem 0 1.5rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .avatar {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #22a45d;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    font-size: 0.85rem;
                }
                .author-name {
                    font-weight: 700;
                    font-size: 0.9rem;
                }
                .author-since {
                    color: #64748b;
                    font-size: 0.75rem;
                }
                .faq-section {
                    background: #f1f5f9;
                }
                .faq-item {
                    background: #fff;
                    border-radius: 12px;
                    border: 1px solid rgba(31, 42, 68, 0.08);
                    margin-bottom: 1rem;
                    padding: 0 1.25rem;
                    transition: box-shadow 200ms ease;
                }
                .faq-item.open {
                    border-left: 4px solid #22a45d;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.1rem 0;
                    background: none;
                    border: none;
                    font-size: 1rem;
                    font-weight: 600;
                    color: #1f2a44;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    color: #64748b;
                    line-height: 1.6;
                    padding-bottom: 1.1rem;
                }
                .faq-cta {
                    text-align: center;
                    margin-top: 2.5rem;
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    height: 2.5rem;
                    padding: 0 1.5rem;
                    border-radius: 8px;
                    background: #22a45d;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .lead-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                }
                .lead-input {
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid #cbd5e1;
                    font-size: 1rem;
                    font-family: inherit;
                }
                .lead-submit {
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: #22a45d;
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .lead-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .lead-feedback {
                    text-align: center;
                    padding: 0.75rem;
                    border-radius: 8px;
                    font-size: 0.9rem;
                }
                .lead-feedback.error {
                    background: rgba(220, 38, 38, 0.1);
                    color: #dc2626;
                }
                .lead-feedback.success {
                    background: rgba(34, 164, 93, 0.1);
                    color: #22a45d;
                }
                .info-item {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 12px;
                    background: #f1f5f9;
                }
                .info-label {
                    font-weight: 700;
                    font-size: 0.9rem;
                }
                .info-line {
                    color: #64748b;
                    font-size: 0.9rem;
                }
                .site-footer {
                    text-align: center;
                    padding: 2rem;
                    color: #64748b;
                    font-size: 0.85rem;
                }
                @media (max-width: 768px) {
                    .testimonial-grid,
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </main>
    }
}
