//! Local Cart Core - Shared cart types.
//!
//! This crate provides the types behind the browser-local cart:
//! - `storefront` - Cart store, page bindings, and table rendering
//! - `integration-tests` - Behavioural tests across both crates
//!
//! # Architecture
//!
//! The core crate contains only types and the quantity reducer - no storage
//! access, no DOM access, no templating. Everything here is pure and can be
//! tested without a page.
//!
//! # Modules
//!
//! - [`types`] - Line ids, cart lines, the cart map, actions, sort keys, and
//!   numeric coercion of form input

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
