// Domain layer: pricing models and ports to the site's external collaborators.

pub mod model;
pub mod ports;
