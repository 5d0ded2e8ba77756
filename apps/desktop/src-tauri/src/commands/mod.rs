//! # Tauri Commands Module
//!
//! All commands exposed to the webview frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── calculator.rs  ◄─── One command per button action + display read
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const { invoke } = window.__TAURI__.core;                              │
//! │                                                                         │
//! │  const display = await invoke('add_digit', { digit: '5' });             │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn add_digit(                                                          │
//! │      session: State<'_, SessionState>,  ◄── Injected by Tauri          │
//! │      config: State<'_, ConfigState>,    ◄── Injected by Tauri          │
//! │      digit: char,                       ◄── From invoke params         │
//! │  ) -> Result<DisplayResponse, ApiError>                                 │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { previousOperand, operation, currentOperand }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command dispatches exactly one action and returns the
//! refreshed display - no other side effects.

pub mod calculator;
pub mod config;
