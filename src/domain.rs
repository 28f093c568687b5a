pub mod redirects;
pub mod sheets;
