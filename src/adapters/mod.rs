// Adapters layer: concrete implementations for external systems
// (model artifact, CSV input, remote animation).

pub mod animation;
pub mod logistic;
pub mod passenger_csv;
