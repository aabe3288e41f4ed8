use amff_core::QueueNotifier;
use eframe::egui;

/// Show the oldest pending notification as a modal window.
///
/// Returns `true` while a notification is on screen so the caller can disable
/// the rest of the page.
pub fn notification_modal(ctx: &egui::Context, queue: &QueueNotifier) -> bool {
    let Some(notification) = queue.front() else {
        return false;
    };

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(notification.message());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    queue.dismiss();
                }
            });
        });

    true
}
