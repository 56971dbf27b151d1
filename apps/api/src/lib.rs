//! Front-office talent read API and its offline seeding/maintenance tools.

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod generator;
pub mod models;
pub mod routes;
pub mod state;
pub mod talent;
