mod attendance;
pub mod client;
mod employees;
pub mod error;
pub mod types;

pub use client::*;
pub use error::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
