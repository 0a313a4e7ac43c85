//! Repository and storage traits (ports)

mod repositories;
mod storage;

pub use repositories::{
    AccountRepository, EngagementRepository, FoodPostRepository, RepoResult,
};
pub use storage::MediaStorage;
