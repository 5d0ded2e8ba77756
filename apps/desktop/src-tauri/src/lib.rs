//! # Abacus Desktop Library
//!
//! Core library for the Abacus desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! abacus_desktop_lib/
//! ├── lib.rs             ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs         ◄─── State type exports
//! │   ├── session.rs     ◄─── Calculator state management
//! │   └── config.rs      ◄─── Display format configuration
//! ├── commands/
//! │   ├── mod.rs         ◄─── Command exports
//! │   ├── calculator.rs  ◄─── One command per button action
//! │   └── config.rs      ◄─── Configuration retrieval
//! └── error.rs           ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use separate focused state
//! types. Each command only requests the state it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────────────┐    │
//! │  │    SessionState          │  │    ConfigState                   │    │
//! │  │                          │  │                                  │    │
//! │  │  • The one calculator    │  │  • Locale label                  │    │
//! │  │    state value           │  │  • Group/decimal separators      │    │
//! │  │  • Arc<Mutex<_>>         │  │  • Read-only after startup       │    │
//! │  └──────────────────────────┘  └──────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, SessionState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • SessionState: empty calculator state behind a Mutex               │
/// │     • ConfigState: defaults + ABACUS_* environment overrides            │
/// │                                                                         │
/// │  3. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Abacus Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            // Initialize state objects
            let session_state = SessionState::new();
            let config_state = ConfigState::from_env();
            info!(locale = %config_state.locale, "Display format configured");

            // Register state with Tauri
            app.manage(session_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Calculator commands
            commands::calculator::get_display,
            commands::calculator::add_digit,
            commands::calculator::choose_operation,
            commands::calculator::clear,
            commands::calculator::evaluate,
            commands::calculator::delete_digit,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=abacus=trace` - Show trace for abacus crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,abacus=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
