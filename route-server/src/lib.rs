//! Sea and intermodal route discovery server.
//!
//! A web application that answers: "how can cargo get from this port or
//! inland hub to that one, and how long will each option take?"

pub mod cache;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
