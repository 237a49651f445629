pub mod log;
pub mod main_region;
pub mod migrate;
pub mod pool;
pub mod stats;
