/// Inbound ports (Driving ports) - Use case interfaces
pub mod model_extraction_port;

pub use model_extraction_port::ModelExtractionPort;
