pub mod build_fs;
pub mod routine;
pub mod row_source;
