pub mod analyzer;
pub mod classify;
pub mod config;
pub mod demo;
pub mod dialog;
pub mod export;
pub mod history;
pub mod insights;
pub mod observation;
pub mod sentiment;
pub mod tracker;
pub mod utils;
pub mod viz;
