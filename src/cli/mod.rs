//! CLI infrastructure for the Codenames spymaster
//!
//! This module provides the command-line interface for choosing a clue on
//! a given board, playing simulated games, and inspecting the
//! position-value table.

pub mod commands;
pub mod config;
pub mod output;
