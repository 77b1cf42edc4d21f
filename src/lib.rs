#![allow(clippy::too_many_arguments)]

pub mod error;
pub mod validation;
pub mod config;
pub mod logging;
pub mod model;
pub mod db;
pub mod schedule;
pub mod status;
pub mod messaging;
pub mod ops;
pub mod queries;
pub mod context;
