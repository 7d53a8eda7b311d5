//! Toast notifications.

use std::cell::Cell;
use std::time::Duration;

use leptos::prelude::*;
use storecart_core::{Notice, Notifier};
use storecart_observability::StructuredLogger;

use crate::model::{dismiss_toast, Toast};

/// Queues each notice into the toast stack and drops it again after a
/// fixed delay.
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Cell<u64>,
    duration: Duration,
    logger: StructuredLogger,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<Toast>>, duration_ms: u32, logger: StructuredLogger) -> Self {
        Self {
            toasts,
            next_id: Cell::new(0),
            duration: Duration::from_millis(u64::from(duration_ms)),
            logger,
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: &Notice) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));

        let toasts = self.toasts;
        toasts.update(|ts| ts.push(Toast::new(id, notice)));
        set_timeout(move || toasts.update(|ts| dismiss_toast(ts, id)), self.duration);

        self.logger
            .debug_builder("toast shown")
            .field("notice", notice.to_string())
            .emit();
    }
}
