pub mod analyzer;
pub mod api;
pub mod config;
pub mod data_models;
pub mod demo;
pub mod error;
pub mod keywords;
pub mod search_client;
pub mod service;
pub mod summary;
