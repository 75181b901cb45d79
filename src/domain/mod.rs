// Domain layer: core models, events, and ports (interfaces).
// No external dependencies beyond std/serde.

pub mod events;
pub mod model;
pub mod ports;
