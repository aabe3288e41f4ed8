mod chart_card;
mod grid;

pub use chart_card::chart_row;
pub use grid::card_grid;
