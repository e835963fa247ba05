pub mod availability;
pub mod health;
pub mod times;
