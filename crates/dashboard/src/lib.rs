pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod platform;
