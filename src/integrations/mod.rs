//! External service integrations.

pub mod kyc_client {
    pub use crate::kyc_client::*;
}

pub mod clipboard {
    pub use crate::clipboard::*;
}
