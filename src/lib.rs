//! Extracurricular activity signup service for Mergington High School.
//!
//! Students browse the activity list, sign up with their school email and
//! unregister again. Rosters live in memory for the lifetime of the process.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;
