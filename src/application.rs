pub mod build_routine;
pub mod build_stage;
pub mod copy_headers;
pub mod fetch_mapping;
pub mod reset_output;
pub mod write_manifest;

#[cfg(test)]
pub(crate) mod test_support;
