use amff_core::{Notification, Notifier};

/// Shows notifications with the browser's blocking `alert` dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notification: Notification) {
        let message = notification.message();
        web_sys::console::log_1(&message.as_str().into());

        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(&message) {
            web_sys::console::warn_2(&"alert failed:".into(), &err);
        }
    }
}
