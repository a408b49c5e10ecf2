pub mod data;
pub mod gazetteer;
pub mod rules;

pub use data::*;
