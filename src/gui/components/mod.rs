// src/gui/components/mod.rs
pub mod card_grid;
pub mod detail_modal;
pub mod image_viewer;
pub mod top_bar;
