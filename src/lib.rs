//! In-memory todo list with filtering and overdue notifications.

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;
