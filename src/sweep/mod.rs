pub mod driver;
pub mod summary;
pub mod tables;
