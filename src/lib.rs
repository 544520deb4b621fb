//! Moon phase service: serves a small static page and aggregates USNO moon
//! data with NASA's picture of the day behind `/api/moon-phase`.

pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
