// Upstream clients

pub mod client;
pub mod image_host;

pub use client::{StoreClient, Table};
pub use image_host::ImageHostClient;
