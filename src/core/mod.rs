// Controller and domain-layer modules
pub mod form_client {
    pub use crate::form_client::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod presentation {
    pub use crate::presentation::*;
}

pub mod errors {
    pub use crate::errors::*;
}
