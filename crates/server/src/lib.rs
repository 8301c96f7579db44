pub mod api;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod error_convert;

// Mock collaborators backing the server functions
#[cfg(feature = "server")]
pub mod directory;

#[cfg(feature = "server")]
pub mod insights;

#[cfg(feature = "server")]
pub mod notifications;
