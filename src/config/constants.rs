//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// JWT token expiration in hours
pub const TOKEN_EXPIRATION_HOURS: i64 = 1;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";

/// Database holding all collections
pub const DATABASE_NAME: &str = "carDoctor";

/// Collection of services offered by the workshop
pub const COLLECTION_SERVICES: &str = "services";

/// Collection of customer bookings
pub const COLLECTION_BOOKINGS: &str = "bookings";
