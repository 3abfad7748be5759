//! Deduction Estimator
//!
//! This crate estimates monthly social insurance deductions from take-home
//! pay. Given a net salary, an age and a region, it derives the gross
//! salary and the employee and employer contributions for health, pension,
//! employment and long-term-care insurance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod report;
