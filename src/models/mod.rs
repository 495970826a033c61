pub mod report;
pub mod revenue;
