//! Grid Snake - a 16x16 snake simulation with a terminal front end
//!
//! This library provides:
//! - Core simulation engine (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Per-session statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
