//! Application service layer - use cases, config, trip board, receipts

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod network;
pub mod repository;
