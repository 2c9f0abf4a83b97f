//! Client-side state owned by pages and passed down to components.

pub mod ui;
