// Domain layer - Pure types and rules, no I/O
pub mod quality;
pub mod reading;
