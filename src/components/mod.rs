//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bar_chart` and `sheet` are independent leaf components. Neither reads
//! context; everything they render arrives through props.

pub mod bar_chart;
pub mod sheet;
