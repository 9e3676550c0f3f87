// Domain layer - pure value types and transforms, no I/O
pub mod dataset;
pub mod error;
pub mod flux;
pub mod navigation;
pub mod resample;
pub mod time_range;
