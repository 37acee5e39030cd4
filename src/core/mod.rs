pub mod datetime;
pub mod fields;
pub mod html;
pub mod patterns;

pub use crate::utils::error::Result;
