pub use self::{memory::*, seed::*};

mod memory;
mod seed;
