pub mod attributes;
pub mod colorbar;
pub mod error;
pub mod gm;
pub mod legend;
pub mod plot;
pub mod slab;
pub mod ticks;
