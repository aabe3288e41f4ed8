use eframe::egui;

/// Lay `items` out in rows of `per_row` equal-width columns.
///
/// `add` receives the column `Ui`, the item's index in `items`, and the item.
pub fn card_grid<T>(
    ui: &mut egui::Ui,
    items: &[T],
    per_row: usize,
    mut add: impl FnMut(&mut egui::Ui, usize, &T),
) {
    let per_row = per_row.max(1);
    for (row, chunk) in items.chunks(per_row).enumerate() {
        ui.columns(per_row, |columns| {
            for (i, item) in chunk.iter().enumerate() {
                add(&mut columns[i], row * per_row + i, item);
            }
        });
        ui.add_space(12.0);
    }
}
