pub mod access;
pub mod path_logger;

pub use access::AccessPolicy;
pub use path_logger::PathLogger;
