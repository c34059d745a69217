use std::cell::Cell;

use log::{info, warn};
use thiserror::Error;

use super::form::Lead;
use super::relay::{GlooRelay, RelayClient, RelayMeta, RelayOutcome, RelayPayload};
use super::whatsapp::WhatsAppLink;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not open {url}: {reason}")]
    Open { url: String, reason: String },
}

pub trait Browser {
    /// Opens `url` in a new browsing context.
    fn open_new_context(&self, url: &str) -> Result<(), BrowserError>;
}

pub struct WindowBrowser;

impl Browser for WindowBrowser {
    fn open_new_context(&self, url: &str) -> Result<(), BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        let open_error = |e: wasm_bindgen::JsValue| BrowserError::Open {
            url: url.to_string(),
            reason: format!("{:?}", e),
        };
        match window.open_with_url_and_target(url, "_blank").map_err(open_error)? {
            Some(_) => Ok(()),
            None => {
                // Popup blocked: take the current tab there instead.
                warn!("New window was blocked, navigating current tab to WhatsApp");
                window.location().set_href(url).map_err(open_error)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub outcome: RelayOutcome,
    pub whatsapp_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Another submission from this form is still in flight.
    Busy,
    Delivered(Delivery),
}

/// Releases the in-flight flag on every exit path.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Sends one lead at a time: relay first as a best-effort copy, then the
/// WhatsApp deep link no matter how the relay went.
pub struct LeadDispatcher<R, B> {
    relay: R,
    browser: B,
    meta: RelayMeta,
    whatsapp: WhatsAppLink,
    in_flight: Cell<bool>,
}

pub type WebDispatcher = LeadDispatcher<GlooRelay, WindowBrowser>;

impl WebDispatcher {
    pub fn for_site() -> Self {
        LeadDispatcher::new(
            GlooRelay::new(config::RELAY_ENDPOINT),
            WindowBrowser,
            RelayMeta::from_config(),
            WhatsAppLink::new(config::LEAD_WHATSAPP_NUMBER),
        )
    }
}

impl<R: RelayClient, B: Browser> LeadDispatcher<R, B> {
    pub fn new(relay: R, browser: B, meta: RelayMeta, whatsapp: WhatsAppLink) -> Self {
        Self {
            relay,
            browser,
            meta,
            whatsapp,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn dispatch(&self, lead: Lead) -> Dispatch {
        let _guard = match InFlight::acquire(&self.in_flight) {
            Some(guard) => guard,
            None => return Dispatch::Busy,
        };

        let payload = RelayPayload::new(&self.meta, &lead);
        let outcome = RelayOutcome::from(self.relay.send(&payload).await);
        match &outcome {
            RelayOutcome::Accepted => info!("Relay accepted lead"),
            RelayOutcome::Declined(reason) => warn!("Relay declined lead: {:?}", reason),
            RelayOutcome::Failed(e) => warn!("Relay failed: {}", e),
        }

        let whatsapp_url = self.whatsapp.for_lead(&lead);
        if let Err(e) = self.browser.open_new_context(&whatsapp_url) {
            warn!("WhatsApp redirect failed: {}", e);
        }

        Dispatch::Delivered(Delivery { outcome, whatsapp_url })
    }
}
