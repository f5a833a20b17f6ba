#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use line_ranges::{LineRange, LineRangeBuilder, LineRangeList};
//!
//! // The builder normalizes raw scanner output into a valid range.
//! let range = LineRangeBuilder::new().set_line_range(10, 20).build();
//! assert_eq!(range.start(), 10);
//! assert_eq!(range.end(), 20);
//!
//! // Inverted or negative inputs are repaired, never rejected.
//! let noisy = LineRangeBuilder::new().set_line_range(20, -3).build();
//! assert_eq!(noisy, LineRange::new(0, 20));
//!
//! // The list stores each range as one packed word.
//! let mut list = LineRangeList::new();
//! list.push(range);
//! list.push(noisy);
//!
//! for range in &list {
//!     println!("covers lines {}", range);
//! }
//! ```
//!
//! # Memory Efficiency
//!
//! A [`LineRange`] is exactly one machine word, and [`LineRangeList`] stores
//! elements as packed `u64` words in a single buffer, so a populated and
//! trimmed list costs `8 * len` bytes of heap plus the list header:
//!
//! ```rust
//! use core::mem::size_of;
//! use line_ranges::LineRange;
//!
//! assert_eq!(size_of::<LineRange>(), 8);
//! ```
//!
//! The full `u32` line-number domain round-trips through the packed
//! representation, including `u32::MAX`:
//!
//! ```rust
//! use line_ranges::{LineRange, LineRangeList};
//!
//! let mut list = LineRangeList::new();
//! list.push(LineRange::new(1350, u32::MAX));
//! assert_eq!(list.get(0), LineRange::new(1350, u32::MAX));
//! ```

extern crate alloc;

mod line_range;
mod line_range_list;

pub use line_range::{LineRange, LineRangeBuilder};
pub use line_range_list::{IntoIter, Iter, LineRangeList};

#[cfg(test)]
#[path = "tests/line_range_tests.rs"]
mod line_range_tests;

#[cfg(test)]
#[path = "tests/line_range_list_tests.rs"]
mod line_range_list_tests;
