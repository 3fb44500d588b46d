//! Application services layer - Use cases and business logic.
//!
//! Services depend on abstractions (traits) for dependency inversion;
//! handlers see only the traits, the serve command wires up the
//! MongoDB/JWT-backed implementations.

mod booking_service;
mod catalog_service;
mod token_service;

pub use booking_service::{BookingStore, MongoBookingStore};
pub use catalog_service::{MongoServiceCatalog, ServiceCatalog};
pub use token_service::{Claims, JwtTokenService, TokenResponse, TokenService};
