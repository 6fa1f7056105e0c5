//! `boardroom-dashboard`
//!
//! **Responsibility:** role-gated page access for the business dashboard.
//!
//! This crate provides:
//! - The route gate (loading / login redirect / fallback redirect / content)
//! - The protected route table and its access matrix
//! - Configuration loading and validation
//! - The [`Dashboard`] shell wiring auth, gates and number formatting
//!
//! Rendering itself belongs to the UI layer; everything here is synchronous
//! and free of I/O apart from reading the config file.

pub mod config;
pub mod gate;
pub mod matrix;
pub mod navigation;
pub mod routes;
pub mod shell;

pub use config::DashboardConfig;
pub use gate::{GateState, Rendered, RoleGate};
pub use matrix::AccessMatrix;
pub use navigation::{HistoryNavigator, Navigator};
pub use routes::{ProtectedRoute, RouteTable};
pub use shell::Dashboard;
