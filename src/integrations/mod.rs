//! External service integrations.

pub mod relay_client {
    pub use crate::relay_client::*;
}
