//! Cover image storage

mod image_store;

pub use image_store::{ImageStore, ImageUpload, ALLOWED_EXTENSIONS};
