//! Controller layer: UI events and the reducer that routes them to the widgets.

pub mod events;
pub mod reducer;
