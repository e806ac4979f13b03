//! CLI subcommand modules.
//!
//! This module contains the implementations for all tenet CLI subcommands.

pub(crate) mod analyze;
pub(crate) mod forecast;
pub(crate) mod inspect;
pub(crate) mod philosophies;
pub(crate) mod ratios;
