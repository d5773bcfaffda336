//! Building blocks shared by the wizard's screens.
pub mod error_panel;
pub mod pico;
pub mod searchable_select;
pub mod step_guide;
