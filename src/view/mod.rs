// src/view/mod.rs
//
// Plain view models: what a card or the detail modal shows, computed from a
// Record. The GUI and the CLI both draw from these.

pub mod card;
pub mod detail;

pub use card::{CardView, cards};
pub use detail::{DetailView, SpecRow};
