//! Pure helpers shared by the components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout math, sample validation and class merging live here so they can be
//! tested without a rendering runtime.

pub mod bar_layout;
pub mod class_list;
pub mod samples;
