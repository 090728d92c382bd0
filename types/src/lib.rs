pub mod code;
pub mod color;
pub mod feedback;
pub mod guess;

pub use code::*;
pub use color::*;
pub use feedback::*;
pub use guess::*;
