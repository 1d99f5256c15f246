//! Shared contracts for the inventory dashboard: domain records, dashboard
//! DTOs and the static fixture datasets the frontend renders from.

pub mod dashboards;
pub mod domain;
pub mod fixtures;
