//! HTTP request handlers

pub mod admin;
pub mod auth;
pub mod categories;
pub mod comics;
pub mod health;
