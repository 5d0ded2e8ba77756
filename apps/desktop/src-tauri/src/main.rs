//! # Abacus Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Abacus Desktop                                  │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  ┌────────────────────────────────────────────────────────────┐  │  │
//! │  │  │                  Button Grid Frontend                      │  │  │
//! │  │  │  • Previous/current display lines                          │  │  │
//! │  │  │  • Digits 0-9, point   • + - × ÷   • AC, DEL, =            │  │  │
//! │  │  └────────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                           │  │
//! │  │                              │                                   │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Thin binary over the lib                          │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Sets up logging, state, commands                  │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► add_digit, choose_operation, clear, evaluate,     │  │
//! │  │                delete_digit, get_display, get_config             │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► SessionState, ConfigState                         │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │     abacus-core  (pure reducer / evaluator / formatter)          │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // The actual setup is in lib.rs for better testability
    abacus_desktop_lib::run();
}
