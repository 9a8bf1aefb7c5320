pub mod comparison;
pub mod health;
