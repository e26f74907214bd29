// Domain-layer modules and shared errors/models
pub mod address_validator {
    pub use crate::address_validator::*;
}

pub mod risk_summary {
    pub use crate::risk_summary::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
