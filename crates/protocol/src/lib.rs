//! # EOData Protocol Library
//!
//! Byte-level primitives shared by every Endless Online data file.
//!
//! ## Codecs ([`codecs`])
//! Numbers are packed into 1-4 bytes as base-253 digits offset by one:
//! - char: 1 byte (0 to 252)
//! - short: 2 bytes (max 64008)
//! - three: 3 bytes (max 16194276)
//! - int: 4 bytes (max 4097152080)
//!
//! Byte 254 marks an absent position and decodes to a zero digit. Byte 0 is
//! read as 128.
//!
//! ## Cursor ([`cursor`])
//! [`ByteCursor`] reads numbers, fixed-length strings and 0xFF-terminated
//! strings sequentially from a file or buffer.
//!
//! ```rust,no_run
//! use eodata_protocol::ByteCursor;
//!
//! let mut cursor = ByteCursor::from_file("data/pub/dat001.eif")?;
//! let magic = cursor.read_fixed_string(3)?;
//! let revision = cursor.read_int()?;
//! # Ok::<(), eodata_core::DataError>(())
//! ```

pub mod codecs;
pub mod cursor;

pub use codecs::*;
pub use cursor::*;
