//! Store Server - storefront and admin console backend
//!
//! # Architecture overview
//!
//! - **Catalog** (`catalog`): sorting, pagination, listing queries, slugs
//! - **Cart** (`cart`): variant gate, merge-by-id, checkout totals
//! - **Database** (`db`): embedded SurrealDB models and repositories
//! - **Auth** (`auth`): JWT + Argon2 for the admin console
//! - **HTTP API** (`api`): axum routers and handlers
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── auth/          # admin authentication
//! ├── catalog/       # product grid composition
//! ├── cart/          # cart write path and totals
//! ├── db/            # database layer
//! ├── services/      # cart badge events
//! └── utils/         # errors, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::JwtService;
pub use cart::{CartError, CheckoutTotals};
pub use catalog::{ListingPage, ListingQuery, SortKey};
pub use crate::core::{Config, Server, ServerState, build_router};
pub use services::{CartBadge, CartEvents};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_____  ________
  \__ \/ __/ __ \/ ___/ _ \
 ___/ / /_/ /_/ / /  /  __/
/____/\__/\____/_/   \___/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
