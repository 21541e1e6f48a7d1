//! Next train server.
//!
//! A web service that answers: "when does the next train leave from the
//! station nearest to me?"

pub mod config;
pub mod domain;
pub mod geo;
pub mod handler;
pub mod message;
pub mod ptv;
pub mod web;
