pub mod caching_descriptor_source;
pub mod sccm_gateway;
pub mod wsus_gateway;

pub use caching_descriptor_source::CachingDescriptorSource;
pub use sccm_gateway::SccmGateway;
pub use wsus_gateway::WsusGateway;
