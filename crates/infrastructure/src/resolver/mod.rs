pub mod system;
pub mod udp;
pub mod upstream;
pub mod wire;

pub use system::SystemHostResolver;
pub use upstream::UpstreamHostResolver;
