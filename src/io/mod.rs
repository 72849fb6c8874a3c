//! File I/O.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Payload |
//! |--------|-----------|------|------|---------|
//! | OFF | `.off` | ✓ | ✓ | Indexed triangle mesh |
//! | TET | `.tet` | ✓ | ✓ | Classified tetrahedral complex |
//! | XYZ | `.xyz` | ✓ | ✓ | Raw point cloud |
//!
//! The three formats carry different payloads (a complex goes in, a
//! mesh comes out), so there is no extension-dispatching `load`/`save`
//! pair here; callers pick the module matching what they hold:
//!
//! ```no_run
//! use crust::extract::extract_surface;
//! use crust::io::{off, tet};
//!
//! let complex = tet::load("shape.tet").unwrap();
//! let mesh = extract_surface(&complex);
//! off::save(&mesh, "shape.off").unwrap();
//! ```

pub mod off;
pub mod tet;
pub mod xyz;
