//! Domain layer: entities shared by the account services.

pub mod entities;

pub use entities::*;
