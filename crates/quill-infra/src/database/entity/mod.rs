//! SeaORM entity definitions and their domain conversions.

pub mod post;
pub mod user;
