//! Shared state for the UI

use dioxus::prelude::*;

use crate::config::{load_theme, Theme};

/// Active theme, shared across all views and persisted on change
pub static ACTIVE_THEME: GlobalSignal<Theme> = Signal::global(load_theme);
