//! Transient user-facing notifications.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    EpochSelected { epoch: u32 },
    Detail { kind: String, category: String },
}

impl Notification {
    pub fn message(&self) -> String {
        match self {
            Notification::EpochSelected { epoch } => format!("Showing details for Epoch {}", epoch),
            Notification::Detail { kind, category } => {
                format!("Showing {} {} details", kind, category)
            }
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Presents notifications to the user. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Writes notifications to the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!("{}", notification);
    }
}

/// Adapts a closure.
pub struct FnNotifier<F>(pub F);

impl<F: Fn(Notification)> Notifier for FnNotifier<F> {
    fn notify(&self, notification: Notification) {
        (self.0)(notification)
    }
}

/// Collects notifications for a UI to show one at a time.
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct QueueNotifier {
    queue: Rc<RefCell<VecDeque<Notification>>>,
}

impl QueueNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest pending notification.
    pub fn front(&self) -> Option<Notification> {
        self.queue.borrow().front().cloned()
    }

    pub fn dismiss(&self) -> Option<Notification> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl Notifier for QueueNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!("{}", notification);
        self.queue.borrow_mut().push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Notification::EpochSelected { epoch: 40 }.message(),
            "Showing details for Epoch 40"
        );
        let detail = Notification::Detail {
            kind: "training".to_string(),
            category: "validation".to_string(),
        };
        assert_eq!(detail.to_string(), "Showing training validation details");
    }

    #[test]
    fn test_queue_is_fifo_and_shared() {
        let queue = QueueNotifier::new();
        let handle = queue.clone();
        queue.notify(Notification::EpochSelected { epoch: 10 });
        queue.notify(Notification::EpochSelected { epoch: 20 });

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.front(), Some(Notification::EpochSelected { epoch: 10 }));
        assert_eq!(handle.dismiss(), Some(Notification::EpochSelected { epoch: 10 }));
        assert_eq!(queue.dismiss(), Some(Notification::EpochSelected { epoch: 20 }));
        assert!(handle.is_empty());
        assert_eq!(handle.dismiss(), None);
    }

    #[test]
    fn test_fn_notifier() {
        let seen = RefCell::new(Vec::new());
        let notifier = FnNotifier(|n: Notification| seen.borrow_mut().push(n.message()));
        notifier.notify(Notification::EpochSelected { epoch: 100 });
        assert_eq!(seen.into_inner(), vec!["Showing details for Epoch 100".to_string()]);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Notification::EpochSelected { epoch: 60 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "epoch_selected", "epoch": 60}));
    }
}
