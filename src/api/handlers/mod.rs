pub mod compare;
pub mod health;
