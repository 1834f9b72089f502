//! KYC Simulator Client Library
//!
//! This library provides the client side of the KYC simulator demo: it sends
//! the identity form to the KYC backend, and renders the returned attestation
//! (score, badge, IPFS CID, transaction link) through an injected view.
//!
//! # Modules
//!
//! - `core`: Controller and domain types.
//! - `integrations`: External service clients.
//! - `animation`: Cancellable processing-step animation.
//! - `clipboard`: Clipboard abstraction and OSC 52 implementation.
//! - `config`: Configuration management and endpoint selection.
//! - `errors`: Error handling types.
//! - `form_client`: The form/loading/result controller.
//! - `kyc_client`: KYC backend HTTP client.
//! - `links`: Explorer and dashboard link builders.
//! - `models`: Request, response and attestation record.
//! - `presentation`: Display values derived from a record.
//! - `terminal`: Text view used by the command-line host.
//! - `view`: The view trait and UI enums.

pub mod core;
pub mod integrations;

pub mod animation;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod form_client;
pub mod kyc_client;
pub mod links;
pub mod models;
pub mod presentation;
pub mod terminal;
pub mod view;
