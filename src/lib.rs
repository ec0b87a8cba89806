//! Rust library for preprocessing fasta headers in genome-alignment pipelines.
//!
//! # Overview
//! headcut cuts sample/event prefixes and trailing annotation suffixes off fasta
//! sequence headers, and records a table mapping every original header to its cut
//! form so downstream consumers (e.g. a graph built from the same assemblies) can
//! follow the rename.
//!
//! Pangenome inputs name their contigs like
//! ```text
//! >HG02055#1#h1tg000001l
//! >chr1  AC:CM000663.2  gi:568336023  LN:248956422
//! ```
//! while downstream tools want `h1tg000001l` and `chr1`. Cutting is controlled by
//! three parameters: a `cut_before` marker set (keep what follows the selected
//! marker), an optional 1-based occurrence index choosing *which* marker (unset
//! means the last one), and a `cut_after` marker set (drop from the earliest
//! marker on). Cutting a header down to nothing is a hard error.
//!
//! ## Iterator-like API
//! headcut's main API is similar to Rust iterators, but it uses custom operations
//! that operate on fasta records and it supports easy multithreading.
//!
//! Typically, you would specify *operations* (read from fasta, cut headers, output
//! to fasta or a header table) on records in a chain, and these are executed in
//! order when you call [`run()`](Records::run) or
//! [`run_with_threads()`](Records::run_with_threads).
//!
//! ```no_run
//! use headcut::*;
//!
//! # fn demo() -> headcut::errors::Result<()> {
//! read_fasta("seq.fa", 256)?
//!     .cut_headers(CutParams::new("#", None, ""))
//!     .collect_fasta("seq.cut.fa")
//!     .run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Header tables
//! Per-sample tables are built independently (one task per sample) and joined into
//! one artifact with a global uniqueness check on the original headers:
//!
//! ```no_run
//! use headcut::*;
//! use std::path::Path;
//!
//! # fn demo() -> headcut::errors::Result<()> {
//! let samples = [
//!     SampleFasta::new("hg02055.fa", "HG02055"),
//!     SampleFasta::new("grch38.fa", "GRCh38"),
//! ];
//!
//! make_header_table(
//!     &samples,
//!     Some(&CutParams::new("#", None, " ")),
//!     Path::new("work"),
//!     Path::new("headers.tsv"),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! Each row is `original_header \t cut_header \t event \t sequence_length`.
//!
//! ## Configuration
//! Pipelines drive the cutter from their preprocessor config; see
//! [`PreprocessConfig`] for reading the `cutHeaders` step from YAML.

pub mod config;
pub mod cutter;
pub mod errors;
pub mod fasta;
pub mod iter;
pub mod record;
pub mod table;

// commonly used functions and types

pub use crate::config::*;
pub use crate::cutter::*;
pub use crate::fasta::*;
pub use crate::iter::*;
pub use crate::record::*;
pub use crate::table::*;
