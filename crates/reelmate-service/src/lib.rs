//! # reelmate-service
//!
//! Application layer containing business logic, services, DTOs, and the
//! local-disk media storage backend.

pub mod dto;
pub mod services;
pub mod storage;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use services::{
    AuthOutcome, AuthService, EngagementService, FoodPartnerProfile, FoodPartnerService,
    FoodService, NewFoodPost, Principal, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
pub use storage::LocalMediaStorage;
