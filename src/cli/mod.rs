//! CLI infrastructure for the Game of 15 toolkit
//!
//! This module provides the command-line interface for playing matches
//! against the search engine and for analyzing positions exhaustively.

pub mod commands;
pub mod output;
