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
use crate::{
    stack_blur, stack_blur_with_intermediate, BlurError, BlurImageMut, DivisorTable,
    FastBlurChannels, StackBlurConfig, ThreadingPolicy, INTERMEDIATE_CHANNELS,
};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};

/// Downsample factor used when blurring large backgrounds.
pub const DEFAULT_DOWNSCALE: f32 = 0.25;

/// Performs stack blur on the image
///
/// RGB8 and RGBA8 images are blurred as is, alpha is preserved.
/// Any other pixel type is converted into RGBA8 first.
///
/// NOTE: Alpha must be associated if this image with alpha
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate
/// * `radius`: radius in range 1..=254
/// * `threading_policy` - Threads usage policy
pub fn stack_blur_image(
    image: DynamicImage,
    radius: u32,
    threading_policy: ThreadingPolicy,
) -> Result<DynamicImage, BlurError> {
    match image {
        DynamicImage::ImageRgb8(rgb_image) => {
            let (width, height) = rgb_image.dimensions();
            let mut new_image = rgb_image.into_raw();
            let mut blur_image =
                BlurImageMut::borrow(&mut new_image, width, height, FastBlurChannels::Channels3);
            stack_blur(&mut blur_image, radius, threading_policy)?;
            RgbImage::from_raw(width, height, new_image)
                .map(DynamicImage::ImageRgb8)
                .ok_or(BlurError::UnsupportedImageType)
        }
        DynamicImage::ImageRgba8(rgba_image) => {
            let (width, height) = rgba_image.dimensions();
            let mut new_image = rgba_image.into_raw();
            let mut blur_image =
                BlurImageMut::borrow(&mut new_image, width, height, FastBlurChannels::Channels4);
            stack_blur(&mut blur_image, radius, threading_policy)?;
            RgbaImage::from_raw(width, height, new_image)
                .map(DynamicImage::ImageRgba8)
                .ok_or(BlurError::UnsupportedImageType)
        }
        other => stack_blur_image(
            DynamicImage::ImageRgba8(other.to_rgba8()),
            radius,
            threading_policy,
        ),
    }
}

/// Size of the downsampled image, width is aligned down to 4 pixels.
fn downscaled_size(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let scaled_width = ((width as f32 * scale).round() as u32) & !0x03;
    let scaled_height = (height as f32 * scale).round() as u32;
    (scaled_width.max(1), scaled_height.max(1))
}

/// Cheap large radius blur: downsample by `scale`, blur with the radius scaled by the same
/// factor, then upsample back to the original size.
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate
/// * `radius`: radius in the original image pixels, scaled radius is clamped into 1..=254
/// * `scale`: downsample factor in range (0, 1], see [DEFAULT_DOWNSCALE]
/// * `threading_policy` - Threads usage policy
pub fn stack_blur_image_downscaled(
    image: DynamicImage,
    radius: u32,
    scale: f32,
    threading_policy: ThreadingPolicy,
) -> Result<DynamicImage, BlurError> {
    if !scale.is_finite() || scale <= 0. || scale > 1. {
        return Err(BlurError::InvalidArguments);
    }
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(BlurError::ZeroBaseSize);
    }
    let (small_width, small_height) = downscaled_size(width, height, scale);
    let config = StackBlurConfig::scaled(radius, scale);
    tracing::debug!(
        small_width,
        small_height,
        radius = config.radius(),
        "downscaled stack blur"
    );

    let small = imageops::resize(
        &image.to_rgba8(),
        small_width,
        small_height,
        FilterType::Triangle,
    );
    let mut small_raw = small.into_raw();
    let table = DivisorTable::for_config(&config)?;
    let mut intermediate =
        vec![0u8; small_width as usize * small_height as usize * INTERMEDIATE_CHANNELS];
    let mut blur_image = BlurImageMut::borrow(
        &mut small_raw,
        small_width,
        small_height,
        FastBlurChannels::Channels4,
    );
    stack_blur_with_intermediate(
        &mut blur_image,
        &mut intermediate,
        &config,
        &table,
        threading_policy,
    )?;

    let blurred = RgbaImage::from_raw(small_width, small_height, small_raw)
        .ok_or(BlurError::UnsupportedImageType)?;
    let restored = imageops::resize(&blurred, width, height, FilterType::Triangle);
    Ok(DynamicImage::ImageRgba8(restored))
}
