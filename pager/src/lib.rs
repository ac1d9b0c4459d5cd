pub mod appstate;
pub mod config;
pub mod repository;
pub mod response;
pub mod service;
