// Application layer - use cases and the repository boundary
pub mod browse_service;
pub mod flux_repository;
