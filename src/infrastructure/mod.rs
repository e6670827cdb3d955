pub mod clock;
pub mod config;
pub mod demo;
pub mod loader;
pub mod reference;
