use super::form::Lead;

/// Builds `wa.me` deep links for a single E.164 number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatsAppLink {
    number: String,
}

impl WhatsAppLink {
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: number.into() }
    }

    pub fn with_text(&self, text: &str) -> String {
        format!("https://wa.me/{}?text={}", self.number, urlencoding::encode(text))
    }

    pub fn for_lead(&self, lead: &Lead) -> String {
        self.with_text(&lead_text(lead))
    }
}

pub fn lead_text(lead: &Lead) -> String {
    format!(
        "Olá! Meu nome é {}.\nTelefone: {}\nVeículo: {}\nMensagem: {}",
        lead.name,
        lead.phone,
        lead.vehicle_or_placeholder(),
        lead.message_or_placeholder(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        Lead {
            name: "Ana Souza".to_string(),
            phone: "19999999999".to_string(),
            vehicle: Some("Fiat Uno".to_string()),
            message: None,
        }
    }

    #[test]
    fn lead_link_targets_number_and_encodes_every_field() {
        let url = WhatsAppLink::new("5519991371808").for_lead(&lead());
        assert!(url.starts_with("https://wa.me/5519991371808?text="));
        assert!(url.contains("Ana%20Souza"));
        assert!(url.contains("19999999999"));
        assert!(url.contains("Fiat%20Uno"));
        assert!(url.contains("Sem%20mensagem%20adicional"));
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));
    }

    #[test]
    fn text_has_one_line_per_field() {
        let text = lead_text(&lead());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Olá! Meu nome é Ana Souza.",
                "Telefone: 19999999999",
                "Veículo: Fiat Uno",
                "Mensagem: Sem mensagem adicional",
            ]
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let url = WhatsAppLink::new("551936214061").with_text("a&b=c?");
        assert_eq!(url, "https://wa.me/551936214061?text=a%26b%3Dc%3F");
    }
}
