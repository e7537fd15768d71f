/// Application layer - Use cases, DTOs and factories
///
/// Orchestrates the domain services and selects infrastructure adapters
/// through the ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
