pub mod canvas;
pub mod marker;
pub mod viewport;
