mod in_memory_repository;
mod pg_pool;
mod pg_tutorial_repository;

pub use in_memory_repository::InMemoryTutorialRepository;
pub use pg_pool::create_pool;
pub use pg_tutorial_repository::PgTutorialRepository;
