//! Command handlers dispatched by the loop.

pub mod add;
pub mod misc;
pub mod remove;
pub mod show;
