pub mod chord;
pub mod line;
pub mod pitch;
pub mod section;
