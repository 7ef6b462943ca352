pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod routes;
pub mod services;
pub mod state;
pub mod wa;
