pub mod build;
pub mod check;
pub mod generate;
pub mod interactive;
pub mod version;
