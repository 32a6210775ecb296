pub mod cost;
pub mod implementations;
pub mod traits;
