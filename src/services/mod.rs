pub mod assistant;
pub mod completion;
pub mod persona;
