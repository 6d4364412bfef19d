pub mod config;
pub mod free_time;
pub mod plan;
pub mod task;
