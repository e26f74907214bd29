// Thin namespace wrapper for API-layer components
pub mod handlers {
    pub use crate::handlers::*;
}

pub mod page {
    pub use crate::page::*;
}

pub mod routes {
    pub use crate::routes::*;
}
