// src/specs/mod.rs
//! # Page specs
//!
//! A spec knows *where the ground truth lives* on one page and how to turn it
//! into a typed `Table`. It does not fetch, cache, render or export; the runner
//! decides when a page is read and what happens with the result.
//!
//! ## Conventions
//! - Selectors come from `config::options::SelectorSet`, never hard-coded here.
//! - Column shapes are fixed (see `table::Record`), so reports and export can
//!   rely on them.
//! - Specs are testable offline against inline HTML fixtures.
//!
//! ## Current specs
//! - `cacao` – the chocolate-bar ratings page: five class-marked columns, each
//!   led by its own label cell.
pub mod cacao;
