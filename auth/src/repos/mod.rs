pub mod error;
pub mod memory;
pub mod postgres;
pub mod principal_repo;

pub use memory::MemoryPrincipalRepo;
pub use postgres::PgPrincipalRepo;
pub use principal_repo::{PrincipalRepo, PrincipalRow};
