//! Mathematical functions shared by the analytic pricers.

pub mod distributions;
