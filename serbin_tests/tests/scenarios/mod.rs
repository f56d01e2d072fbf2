pub mod faults;
pub mod helpers;
pub mod members;
pub mod sample;
