pub mod backup;
pub mod edit;
pub mod log;
pub mod store;
pub mod validate;
