//! Wallet Risk Checker API Library
//!
//! Validates cryptocurrency wallet addresses, queries the GoPlus
//! address-security API, and derives a localized risk summary from its
//! loosely-typed response.
//!
//! # Modules
//!
//! - `api`: HTTP-facing handlers and page.
//! - `core`: Validation, risk derivation, errors and models.
//! - `integrations`: External service clients.
//! - `address_validator`: Chain address format allowlist.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `goplus_client`: GoPlus API client.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request models.
//! - `page`: Server-rendered address form.
//! - `risk_summary`: Risk summary derivation.
//! - `routes`: Router assembly.

pub mod api;
pub mod core;
pub mod integrations;

pub mod address_validator;
pub mod config;
pub mod errors;
pub mod goplus_client;
pub mod handlers;
pub mod models;
pub mod page;
pub mod risk_summary;
pub mod routes;
