//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`areas`] - area management endpoints
//! - [`cargos`] - cargo (job title) management endpoints
//! - [`empleados`] - empleado management endpoints
//! - [`nominas`] - nomina (payroll) management endpoints

pub mod areas;
pub mod cargos;
pub mod empleados;
pub mod health;
pub mod nominas;
