use thiserror::Error;

pub const VEHICLE_PLACEHOLDER: &str = "Nao informado";
pub const MESSAGE_PLACEHOLDER: &str = "Sem mensagem adicional";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Vehicle,
    Message,
}

impl Field {
    /// Maximum length in characters.
    pub const fn max_len(self) -> usize {
        match self {
            Field::Name => 100,
            Field::Phone => 20,
            Field::Vehicle => 50,
            Field::Message => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Preencha seu nome e telefone.")]
    MissingContact,
}

/// Raw field values as typed by the visitor, already capped at each field's
/// maximum length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    name: String,
    phone: String,
    vehicle: String,
    message: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Vehicle => &self.vehicle,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let capped = truncate_chars(value, field.max_len()).to_string();
        match field {
            Field::Name => self.name = capped,
            Field::Phone => self.phone = capped,
            Field::Vehicle => self.vehicle = capped,
            Field::Message => self.message = capped,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A validated lead. Every field is trimmed and truncated; optional fields
/// are `None` when left blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub vehicle: Option<String>,
    pub message: Option<String>,
}

impl Lead {
    pub fn from_form(form: &FormState) -> Result<Self, ValidationError> {
        let name = normalize(form.get(Field::Name), Field::Name);
        let phone = normalize(form.get(Field::Phone), Field::Phone);
        if name.is_empty() || phone.is_empty() {
            return Err(ValidationError::MissingContact);
        }

        let optional = |field: Field| {
            let value = normalize(form.get(field), field);
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
            vehicle: optional(Field::Vehicle),
            message: optional(Field::Message),
        })
    }

    pub fn vehicle_or_placeholder(&self) -> &str {
        self.vehicle.as_deref().unwrap_or(VEHICLE_PLACEHOLDER)
    }

    pub fn message_or_placeholder(&self) -> &str {
        self.message.as_deref().unwrap_or(MESSAGE_PLACEHOLDER)
    }
}

fn normalize(value: &str, field: Field) -> &str {
    truncate_chars(value.trim(), field.max_len())
}

pub fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(name: &str, phone: &str, vehicle: &str, message: &str) -> FormState {
        let mut form = FormState::default();
        form.set(Field::Name, name);
        form.set(Field::Phone, phone);
        form.set(Field::Vehicle, vehicle);
        form.set(Field::Message, message);
        form
    }

    #[rstest]
    #[case("", "19999999999")]
    #[case("Ana", "")]
    #[case("   ", "19999999999")]
    #[case("Ana", " \t\n")]
    #[case("", "")]
    fn rejects_blank_name_or_phone(#[case] name: &str, #[case] phone: &str) {
        let result = Lead::from_form(&form(name, phone, "Carro", "Oi"));
        assert_eq!(result, Err(ValidationError::MissingContact));
    }

    #[test]
    fn blank_optional_fields_fall_back_to_placeholders() {
        let lead = Lead::from_form(&form("Ana", "19999999999", "", "  ")).unwrap();
        assert_eq!(lead.vehicle, None);
        assert_eq!(lead.message, None);
        assert_eq!(lead.vehicle_or_placeholder(), "Nao informado");
        assert_eq!(lead.message_or_placeholder(), "Sem mensagem adicional");
    }

    #[test]
    fn long_name_is_capped_at_one_hundred_chars() {
        let lead = Lead::from_form(&form(&"a".repeat(150), "19999999999", "", "")).unwrap();
        assert_eq!(lead.name.chars().count(), 100);
    }

    #[test]
    fn set_caps_every_field() {
        let state = form(&"n".repeat(101), &"9".repeat(25), &"v".repeat(60), &"m".repeat(501));
        assert_eq!(state.get(Field::Name).len(), 100);
        assert_eq!(state.get(Field::Phone).len(), 20);
        assert_eq!(state.get(Field::Vehicle).len(), 50);
        assert_eq!(state.get(Field::Message).len(), 500);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let lead = Lead::from_form(&form("  Ana  ", " 19999999999 ", " Moto ", "")).unwrap();
        assert_eq!(lead.name, "Ana");
        assert_eq!(lead.phone, "19999999999");
        assert_eq!(lead.vehicle.as_deref(), Some("Moto"));
    }

    #[rstest]
    #[case("", 3, "")]
    #[case("abc", 3, "abc")]
    #[case("abcd", 3, "abc")]
    #[case("João Péres", 4, "João")]
    fn truncation_counts_characters_not_bytes(#[case] input: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(truncate_chars(input, max), expected);
    }

    #[test]
    fn clear_empties_every_field() {
        let mut state = form("Ana", "1", "Carro", "Oi");
        state.clear();
        assert_eq!(state, FormState::default());
    }
}
