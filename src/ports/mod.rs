/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are the use case interfaces driven by the CLI. Outbound
/// ports are the collaborators the core drives: the build tool's object
/// model, the snapshot reader, formatters and console/file output.
pub mod inbound;
pub mod outbound;
