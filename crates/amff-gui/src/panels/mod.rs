pub mod architecture;
pub mod comparison;
pub mod components;
pub mod defects;
pub mod details;
pub mod header;
pub mod notification;
pub mod particles;
pub mod specs;
pub mod stats;
pub mod training;
