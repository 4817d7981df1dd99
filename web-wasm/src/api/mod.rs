//! Calls against the recognition service

pub mod upload;
