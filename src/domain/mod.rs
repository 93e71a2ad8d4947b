// Domain layer: credential models and the client factory port.

pub mod model;
pub mod ports;
