pub mod availability;
pub mod times;
