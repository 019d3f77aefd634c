//! Seating Server - restaurant table allocation
//!
//! Answers "which table should this party get at this time?" for a small
//! venue. Occupancy is simulated deterministically per table and day;
//! large parties can be seated at adjacent tables pushed together.
//!
//! # Module layout
//!
//! ```text
//! seating-server/src/
//! ├── core/          # config, state, server, errors
//! ├── seating/       # occupancy, scoring, merge search, recommender
//! ├── services/      # meal suggestion collaborator
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, validation
//! ```

pub mod api;
pub mod core;
pub mod seating;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use seating::{Recommender, TableRegistry};
pub use services::{MealSuggester, StaticMealSuggester, TheMealDbSuggester};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and install the logger from environment settings
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );
}

pub fn print_banner() {
    println!(
        r#"
   _____            __  _
  / ___/___  ____ _/ /_(_)___  ____ _
  \__ \/ _ \/ __ `/ __/ / __ \/ __ `/
 ___/ /  __/ /_/ / /_/ / / / / /_/ /
/____/\___/\__,_/\__/_/_/ /_/\__, /
                            /____/
    "#
    );
}
