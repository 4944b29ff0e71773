//! PostgreSQL implementations of the domain repository traits.

mod pg_link_repository;
mod pg_stats_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_stats_repository::PgStatsRepository;
