//! Luxury Property Lead Relay Library
//!
//! This library provides the marketing site for a Dubai luxury-property
//! adviser: the server-rendered landing page, the contact endpoint that
//! relays leads to a third-party email API, and a typed controller for the
//! lead forms.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Core lead logic.
//! - `integrations`: External service integrations.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `form`: Lead form controller and contact endpoint client.
//! - `handlers`: HTTP request handlers.
//! - `lead`: Lead validation and relay message composition.
//! - `models`: Request, response and relay payload models.
//! - `relay_client`: Email relay API client.
//! - `routes`: Router assembly.
//! - `site`: Landing page rendering.

pub mod api;
pub mod core;
pub mod integrations;

pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod lead;
pub mod models;
pub mod relay_client;
pub mod routes;
pub mod site;
