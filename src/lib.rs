//! VAT Advisor - Conversational Vehicle Deduction Support
//!
//! This crate implements a dialogue engine that determines whether the
//! value-added tax paid on a vehicle purchase or lease is deductible as an
//! input credit, by collecting industry and vehicle information turn by turn.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
