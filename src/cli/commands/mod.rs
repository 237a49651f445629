pub mod add;
pub mod backup;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod passwd;
pub mod reset;
pub mod show;
