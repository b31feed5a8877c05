// Copyright (c) Radzivon Bartoshyk. All rights reserved.
//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Stack Blur by Mario Klingemann: an approximate gaussian blur over interleaved
//! 8-bit RGB and RGBA images.
//!
//! The blur runs as two separable passes, horizontal into a 3 channel intermediate
//! buffer and vertical back into the image. Each pass slides a triangularly weighted
//! window over a row or a column and updates its sums incrementally, so the cost per
//! pixel does not depend on the radius.
//!
//! ```
//! use stackblur::{stack_blur, BlurImageMut, FastBlurChannels, ThreadingPolicy};
//!
//! let mut pixels = vec![255u8; 16 * 8 * 4];
//! let mut image = BlurImageMut::borrow(&mut pixels, 16, 8, FastBlurChannels::Channels4);
//! stack_blur(&mut image, 3, ThreadingPolicy::Single).unwrap();
//! assert!(pixels.iter().all(|&v| v == 255));
//! ```

mod channels_configuration;
mod divisor_table;
mod image;
mod stack_blur_config;
mod stack_blur_context;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod stack_blur_image;
mod stackblur;
mod threading_policy;
mod unsafe_slice;
mod util;

pub use channels_configuration::FastBlurChannels;
pub use divisor_table::DivisorTable;
pub use image::{BlurImage, BlurImageMut, BufferStore};
pub use stack_blur_config::{StackBlurConfig, MAX_RADIUS};
pub use stack_blur_context::StackBlurContext;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use stack_blur_image::{stack_blur_image, stack_blur_image_downscaled, DEFAULT_DOWNSCALE};
pub use stackblur::{
    horizontal_sweep, stack_blur, stack_blur_into, stack_blur_with_intermediate,
    vertical_sweep, INTERMEDIATE_CHANNELS,
};
pub use threading_policy::ThreadingPolicy;
pub use util::{BlurError, MismatchedSize};
