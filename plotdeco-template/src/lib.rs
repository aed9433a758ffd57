pub mod context;
pub mod error;
pub mod export;
pub mod projection;
pub mod ratio;
pub mod region;
pub mod resize;
pub mod style;
pub mod template;
