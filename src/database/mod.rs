pub mod activities_repo;
pub mod seed;

use std::sync::Arc;

pub use activities_repo::ActivityRegistry;
pub use seed::SeedError;

/// Registry handle shared with request handlers.
pub type SharedRegistry = Arc<ActivityRegistry>;
