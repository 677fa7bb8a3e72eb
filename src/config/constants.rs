//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Records
// =============================================================================

/// Id prefix for recipes ("r001", "r1718000000000", ...)
pub const RECIPE_ID_PREFIX: &str = "r";

/// Id prefix for users
pub const USER_ID_PREFIX: &str = "u";

/// Digits of the numeric suffix produced by the sequential id strategy
pub const SEQUENTIAL_ID_WIDTH: usize = 3;

/// Message returned when a create payload lacks a required field
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

// =============================================================================
// Authentication
// =============================================================================

/// Password that logs into any existing account when insecure demo mode is on.
pub const BYPASS_PASSWORD: &str = "chefmaster";

// =============================================================================
// Storage
// =============================================================================

/// Default directory holding the JSON record files
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the recipe record set inside the data directory
pub const RECIPES_FILE: &str = "recipes.json";

/// File name of the user record set inside the data directory
pub const USERS_FILE: &str = "users.json";

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://recipes.db?mode=rwc";

// =============================================================================
// Seeding
// =============================================================================

/// Default recipe seed file
pub const DEFAULT_SEED_RECIPES: &str = "seed/recipes.json";

/// Default user seed file
pub const DEFAULT_SEED_USERS: &str = "seed/users.json";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Text served at the root path
pub const ROOT_BANNER: &str = "Recipe API is running";
