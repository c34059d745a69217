pub const SITE_NAME: &str = "Nardini Seguros";

// Leads go to the mobile line; the FAQ call-to-action goes to the office.
pub const LEAD_WHATSAPP_NUMBER: &str = "5519991371808";
pub const OFFICE_WHATSAPP_NUMBER: &str = "551936214061";

pub const LEAD_INBOX: &str = "atendimento.americanasp@gmail.com";

pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

pub const REVEAL_THRESHOLD: f64 = 0.15;

pub const ERROR_FEEDBACK_MS: u32 = 3_000;
pub const SUCCESS_FEEDBACK_MS: u32 = 5_000;

/// Relay access key baked in at build time. An empty key makes the relay
/// reject every lead, which the submission flow absorbs.
pub fn relay_access_key() -> &'static str {
    option_env!("RELAY_ACCESS_KEY").unwrap_or("")
}

