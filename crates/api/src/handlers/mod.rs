pub mod order;
pub mod round;
