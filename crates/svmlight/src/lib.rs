//! # svmlight-rs
//!
//! A loader for the SVMLight / LIBSVM sparse text format, producing a
//! compressed-row matrix, per-row labels and optional query ids. Parsing
//! follows scikit-learn's `load_svmlight_file` semantics, so the crate can
//! back that loader directly (see [`compat`]).
//!
//! ```
//! use svmlight_rs::{io::multilabel_from_lines, LoadOptions};
//!
//! let lines = ["1,2 1:0.43 3:0.12 # comment", " 6:0.01 7:0.3"];
//! let ds = multilabel_from_lines(lines, &LoadOptions::default())?;
//! assert_eq!(ds.matrix.shape(), (2, 7));
//! assert_eq!(ds.labels[0].as_slice(), &[1, 2]);
//! assert!(ds.labels[1].is_empty());
//! # Ok::<(), svmlight_rs::SvmLightError>(())
//! ```
//!
//! ## Logging
//!
//! Loaders emit `tracing` events at `debug` level; install a subscriber to
//! see them.

pub mod comments;
pub mod compat;
pub mod error;
pub mod io;
pub mod label;
pub mod matrix;
pub mod parse;
pub mod source;
pub mod types;

pub use error::{MatrixError, SvmLightError};
pub use label::{Label, LabelSet};
pub use matrix::CsrMatrix;
pub use types::*;
