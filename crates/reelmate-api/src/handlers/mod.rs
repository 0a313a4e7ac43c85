//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod food;
pub mod food_partner;
pub mod health;
