// Domain layer: entities, repository ports and pure helpers. No HTTP here.

pub mod model;
pub mod ports;
pub mod services;
