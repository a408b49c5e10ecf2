pub mod id_scanner;
pub mod models;
pub mod processing;
pub mod utils;

pub use id_scanner::IdCardScanner;
