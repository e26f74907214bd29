//! External service integrations.

pub mod goplus_client {
    pub use crate::goplus_client::*;
}
