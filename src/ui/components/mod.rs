//! Reusable UI components

mod button;
pub mod dialog;

pub use button::*;
