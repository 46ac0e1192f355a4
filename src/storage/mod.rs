//! Backing storage for series
//!
//! This module provides a growable array whose capacity policy is explicit
//! and observable, rather than delegated to `Vec`'s allocator heuristics.
//!
//! # Example
//!
//! ```
//! use tempseries::storage::GrowableBuffer;
//!
//! let mut buffer = GrowableBuffer::<f64>::new();
//!
//! for value in [1.0, 2.0, 3.0] {
//!     buffer.push(value);
//! }
//!
//! assert_eq!(buffer.len(), 3);
//! assert_eq!(buffer.capacity(), 4);
//! assert_eq!(buffer.as_slice(), &[1.0, 2.0, 3.0]);
//! ```

mod growable;

pub use growable::GrowableBuffer;
