pub mod error;
pub mod memory;
pub mod postgres;
pub mod todo_repo;

pub use memory::MemoryTodoRepo;
pub use postgres::PgTodoRepo;
pub use todo_repo::{TodoRepo, TodoRow};
