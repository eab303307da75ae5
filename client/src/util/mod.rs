//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chart geometry lives here as plain functions so components stay thin and
//! the math is testable without a browser.

pub mod bar_chart;
pub mod radar;
