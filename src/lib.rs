pub use crate::colour::*;
pub use crate::error::Error;
pub use crate::graph::*;
pub use crate::input::*;
pub use crate::node::*;
pub use crate::report::*;

pub mod colour;
pub mod error;
pub mod graph;
pub mod input;
pub mod logger;
pub mod node;
pub mod report;
