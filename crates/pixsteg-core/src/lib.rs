//! # Pixsteg Core API
//!
//! Hides a whole image ("payload") inside another image ("carrier") by rewriting the
//! least significant bit of the carrier's color channels, and recovers it again.
//!
//! The codec works on in-memory [`PixelGrid`]s:
//! - [`encode`] / [`decode`] with the default [`CodecOptions`]
//! - [`LsbCodec`] for custom options or a custom [`capacity::Resize`] strategy
//!
//! File handling lives in [`commands`] and the builder style [`api`].
//!
//! # Usage Examples
//!
//! ## Hide an image inside another image
//!
//! ```rust
//! use pixsteg_core::PixelGrid;
//!
//! let carrier = PixelGrid::new(100, 100, 3).expect("Cannot create carrier");
//! let secret = PixelGrid::from_fn(50, 50, 3, |r, c, _| (r + c) as u8)
//!     .expect("Cannot create secret");
//!
//! let stego = pixsteg_core::encode(&carrier, &secret).expect("Failed to hide image");
//! // the carrier was too small and got enlarged by factor 3
//! assert_eq!(stego.dimensions(), (300, 300, 3));
//!
//! let unveiled = pixsteg_core::decode(&stego).expect("Failed to unveil image");
//! assert_eq!(unveiled, secret);
//! ```
//!
//! ## Hide an image file inside another image file
//!
//! ```rust,no_run
//! pixsteg_core::api::hide::prepare()
//!     .with_carrier_image("carrier.png")
//!     .with_payload_image("secret.jpg")
//!     .with_output("image-with-a-secret-inside.png")
//!     .execute()
//!     .expect("Failed to hide image in image");
//! ```

#![warn(clippy::redundant_else)]

pub mod addressing;
pub mod api;
pub mod bits;
pub mod capacity;
pub mod codec_options;
pub mod commands;
pub mod error;
pub mod grid;
pub mod header;
pub mod lsb_codec;
pub mod media;
pub mod payload;
pub mod quality;
pub mod result;

pub use crate::codec_options::CodecOptions;
pub use crate::error::SteganoError;
pub use crate::grid::PixelGrid;
pub use crate::lsb_codec::{decode, encode, LsbCodec};
pub use crate::result::Result;
