//! Domain layer: value objects, aggregates and status events
pub mod aggregates;
pub mod events;
pub mod value_objects;
