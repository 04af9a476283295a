mod browser_name;
mod descriptor;
mod detection;
mod engine_name;
mod environment;
mod host;

pub use browser_name::*;
pub use descriptor::*;
pub use detection::*;
pub use engine_name::*;
pub use environment::*;
pub use host::*;
