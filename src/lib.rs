pub mod config;
pub mod credentials;
pub mod error;
pub mod export;
pub mod models;
pub mod parsers;
pub mod reporter;
pub mod scrapers;
pub mod session;
pub mod utils;
