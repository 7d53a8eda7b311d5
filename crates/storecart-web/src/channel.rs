//! Hands the order to the messaging app in a new tab.

use storecart_core::checkout::{ChannelError, OrderChannel, OrderMessage, WhatsAppLink};
use web_sys::Window;

pub struct BrowserChannel {
    window: Window,
    link: WhatsAppLink,
}

impl BrowserChannel {
    pub fn new(window: Window, link: WhatsAppLink) -> Self {
        Self { window, link }
    }
}

impl OrderChannel for BrowserChannel {
    fn dispatch(&self, message: &OrderMessage) -> Result<(), ChannelError> {
        let url = self.link.url_for(message);
        match self.window.open_with_url_and_target(&url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // `open` returns null when a popup blocker steps in
            Ok(None) => Err(ChannelError::Unavailable("popup blocked".to_string())),
            Err(e) => Err(ChannelError::Unavailable(format!("{:?}", e))),
        }
    }
}
