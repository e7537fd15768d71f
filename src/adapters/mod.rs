/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: snapshot-backed build
/// trees, file and console I/O, and the output formatters.
pub mod outbound;
