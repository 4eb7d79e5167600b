// Domain layer: student records, aggregate reports and the reporting port.

pub mod model;
pub mod ports;
