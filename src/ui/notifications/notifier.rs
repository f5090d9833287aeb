// SPDX-License-Identifier: MPL-2.0
//! Cross-context producer handle.
//!
//! Specs sent through a `Notifier` are buffered in an unbounded channel and
//! only reach the queue when the UI thread next ticks it. There is no
//! backpressure: a producer that never stops will grow the queue without
//! limit.

use super::notification::NotificationSpec;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Cloneable, `Send` handle for enqueuing from any thread or task.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: UnboundedSender<NotificationSpec>,
}

impl Notifier {
    /// Hands `spec` over to the UI thread.
    ///
    /// Returns `false` if the queue it feeds has been dropped.
    pub fn notify(&self, spec: NotificationSpec) -> bool {
        self.sender.send(spec).is_ok()
    }
}

/// Receiving end, owned by the queue.
#[derive(Debug)]
pub(crate) struct Inbox {
    sender: UnboundedSender<NotificationSpec>,
    receiver: UnboundedReceiver<NotificationSpec>,
}

impl Inbox {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    pub(crate) fn notifier(&self) -> Notifier {
        Notifier {
            sender: self.sender.clone(),
        }
    }

    /// Takes every spec sent so far, in send order.
    pub(crate) fn drain(&mut self) -> Vec<NotificationSpec> {
        let mut specs = Vec::new();
        while let Ok(spec) = self.receiver.try_recv() {
            specs.push(spec);
        }
        specs
    }
}
