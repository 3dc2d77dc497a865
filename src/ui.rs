//! UI module for the torch
//!
//! # Architecture
//!
//! The UI is organized into two layers:
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic

pub mod animation;
pub mod icons;
pub mod primitives;
pub mod theme;
pub mod widgets;
