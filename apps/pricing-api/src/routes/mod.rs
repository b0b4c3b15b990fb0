//! HTTP route handlers.
//!
//! | Method | Path             | Handler                                 |
//! |--------|------------------|-----------------------------------------|
//! | POST   | `/api/calculate` | [`calculate::calculate_handler`]        |
//! | GET    | `/health`        | [`health::health_handler`]              |

pub mod calculate;
pub mod health;

pub use calculate::calculate_handler;
pub use health::health_handler;
