pub mod ops_generate;
pub mod ops_packages;
pub mod project;
pub mod reporter;
