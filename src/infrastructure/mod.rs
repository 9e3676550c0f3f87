// Infrastructure layer - external dependencies and adapters
pub mod archive_repository;
pub mod config;
