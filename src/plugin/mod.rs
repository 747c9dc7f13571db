pub mod paths;
pub mod remote;

pub use paths::PluginDirectory;
