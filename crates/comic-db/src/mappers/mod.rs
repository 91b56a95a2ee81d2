//! Entity ↔ model mappers

mod category;
mod comic;
mod token;
mod user;
