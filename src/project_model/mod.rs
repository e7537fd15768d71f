/// Project model extraction core
///
/// `domain` holds the value objects of a model, `policies` the tunable
/// classification rules, and `services` the collectors and the aggregator
/// that walk a build tree through the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
