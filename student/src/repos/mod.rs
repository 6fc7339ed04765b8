pub mod error;
pub mod memory;
pub mod postgres;
pub mod student_repo;

pub use memory::MemoryStudentRepo;
pub use postgres::PgStudentRepo;
pub use student_repo::{StudentRepo, StudentRow};
