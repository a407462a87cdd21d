//! Vendor TOPSIS - Multi-criteria ranking of wedding vendors
//!
//! This crate scores vendor candidates against weighted yes/no questions and
//! ranks them with TOPSIS (Technique for Order Preference by Similarity to
//! Ideal Solution).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
