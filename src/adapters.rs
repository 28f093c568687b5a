pub mod sheets;
pub mod tokio_fs;
