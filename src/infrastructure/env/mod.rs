//! Environment store adapters
//!
//! | Store | Backing | `Send + Sync` |
//! |-------|---------|---------------|
//! | [`SystemEnv`] | `std::env` | Yes |
//! | [`InMemoryEnv`] | `RefCell<HashMap>` | No |

pub mod memory;
pub mod system;

pub use memory::InMemoryEnv;
pub use system::SystemEnv;
