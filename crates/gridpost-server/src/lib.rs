//! HTTP boundary for the gridpost sudoku service.
//!
//! This crate owns the request/response shapes of the two API endpoints and
//! the translation of core results into the service's JSON error payloads.
//! All puzzle logic lives in [`gridpost_core`] and [`gridpost_solver`].

pub mod api;
