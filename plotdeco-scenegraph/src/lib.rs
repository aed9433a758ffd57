pub mod canvas;
pub mod error;
pub mod marks;
