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
use crate::stackblur::horizontal::HorizontalStackBlurPass;
use crate::stackblur::stack_blur_pass::StackBlurWorkingPass;
use crate::stackblur::vertical::VerticalStackBlurPass;
use crate::unsafe_slice::UnsafeSlice;
use crate::util::{check_slice_size, checked_image_len};
use crate::{
    BlurError, BlurImage, BlurImageMut, DivisorTable, FastBlurChannels, MismatchedSize,
    StackBlurConfig, ThreadingPolicy,
};

/// Channels count of the intermediate buffer between the two passes.
pub const INTERMEDIATE_CHANNELS: usize = 3;

fn execute_pass(
    pass: &dyn StackBlurWorkingPass,
    pool: Option<&rayon::ThreadPool>,
    thread_count: usize,
) {
    match pool {
        None => pass.pass(0, 1),
        Some(pool) => {
            // Scope returns only when every worker is done, this is the barrier between passes.
            pool.scope(|scope| {
                for thread in 0..thread_count {
                    scope.spawn(move |_| pass.pass(thread, thread_count));
                }
            });
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn stack_blur_passes<const CN: usize>(
    data: &mut [u8],
    intermediate: &mut [u8],
    width: u32,
    height: u32,
    config: &StackBlurConfig,
    table: &DivisorTable,
    pool: Option<&rayon::ThreadPool>,
    thread_count: usize,
) {
    {
        let dst = UnsafeSlice::new(intermediate);
        let horizontal =
            HorizontalStackBlurPass::<CN>::new(data, dst, width, height, config, table);
        execute_pass(&horizontal, pool, thread_count);
    }
    let dst = UnsafeSlice::new(data);
    let vertical =
        VerticalStackBlurPass::<CN>::new(intermediate, dst, width, height, config, table);
    execute_pass(&vertical, pool, thread_count);
}

fn check_intermediate(
    intermediate: &[u8],
    width: u32,
    height: u32,
) -> Result<(), BlurError> {
    let expected = checked_image_len(width, height, INTERMEDIATE_CHANNELS)?;
    if intermediate.len() != expected {
        return Err(BlurError::IntermediateSizeMismatch(MismatchedSize {
            expected,
            received: intermediate.len(),
        }));
    }
    Ok(())
}

fn check_table(config: &StackBlurConfig, table: &DivisorTable) -> Result<(), BlurError> {
    if config.divsum() != table.divsum() {
        return Err(BlurError::DivisorTableMismatch(MismatchedSize {
            expected: config.divsum() as usize,
            received: table.divsum() as usize,
        }));
    }
    Ok(())
}

/// Stack blur using caller provided intermediate buffer and divisor table.
///
/// # Arguments
/// * `image` - buffer used as the source and the destination, only the first three channels
///   are blurred.
/// * `intermediate` - scratch buffer of exactly `width * height * 3` items.
/// * `config` - radius configuration.
/// * `table` - divisor table built for `config`.
/// * `threading_policy` - Threads usage policy.
pub fn stack_blur_with_intermediate(
    image: &mut BlurImageMut<u8>,
    intermediate: &mut [u8],
    config: &StackBlurConfig,
    table: &DivisorTable,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    image.check_layout(None)?;
    check_intermediate(intermediate, image.width, image.height)?;
    check_table(config, table)?;

    let width = image.width;
    let height = image.height;
    let channels = image.channels;
    let thread_count = threading_policy.thread_count(width, height);
    tracing::trace!(width, height, radius = config.radius(), thread_count, "stack blur");

    let pool = if thread_count > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, thread_count, "thread pool creation failed");
                BlurError::ThreadPool
            })?;
        Some(pool)
    } else {
        None
    };

    let data = image.data.borrow_mut();
    match channels {
        FastBlurChannels::Channels3 => stack_blur_passes::<3>(
            data,
            intermediate,
            width,
            height,
            config,
            table,
            pool.as_ref(),
            thread_count,
        ),
        FastBlurChannels::Channels4 => stack_blur_passes::<4>(
            data,
            intermediate,
            width,
            height,
            config,
            table,
            pool.as_ref(),
            thread_count,
        ),
    }
    Ok(())
}

/// Fast gaussian approximation using stack blur.
///
/// Blurs R, G, B channels in place, 4th channel if present is left untouched.
///
/// # Arguments
/// * `image` - mutable buffer contains image data that will be used as a source and destination.
/// * `radius` - kernel half width in range 1..=254.
/// * `threading_policy` - Threads usage policy.
///
/// # Complexity
/// O(1) per pixel, independent of radius.
pub fn stack_blur(
    image: &mut BlurImageMut<u8>,
    radius: u32,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    let config = StackBlurConfig::new(radius)?;
    image.check_layout(None)?;
    let table = DivisorTable::for_config(&config)?;
    let intermediate_len = checked_image_len(image.width, image.height, INTERMEDIATE_CHANNELS)?;
    let mut intermediate = vec![0u8; intermediate_len];
    stack_blur_with_intermediate(image, &mut intermediate, &config, &table, threading_policy)
}

/// Out of place stack blur.
///
/// Owned destination is resized to the source, borrowed one must match it.
/// 4th channel, if present, is copied from the source.
pub fn stack_blur_into(
    src: &BlurImage<u8>,
    dst: &mut BlurImageMut<u8>,
    radius: u32,
    threading_policy: ThreadingPolicy,
) -> Result<(), BlurError> {
    StackBlurConfig::new(radius)?;
    src.copy_to_mut(dst)?;
    stack_blur(dst, radius, threading_policy)
}

/// Single threaded horizontal pass over every row.
///
/// Reads the `channels` interleaved `src` and writes the 3 channel `intermediate`.
pub fn horizontal_sweep(
    src: &[u8],
    intermediate: &mut [u8],
    width: u32,
    height: u32,
    channels: FastBlurChannels,
    config: &StackBlurConfig,
    table: &DivisorTable,
) -> Result<(), BlurError> {
    check_slice_size(src, width, height, channels.channels())?;
    check_intermediate(intermediate, width, height)?;
    check_table(config, table)?;
    let dst = UnsafeSlice::new(intermediate);
    match channels {
        FastBlurChannels::Channels3 => {
            HorizontalStackBlurPass::<3>::new(src, dst, width, height, config, table).pass(0, 1)
        }
        FastBlurChannels::Channels4 => {
            HorizontalStackBlurPass::<4>::new(src, dst, width, height, config, table).pass(0, 1)
        }
    }
    Ok(())
}

/// Single threaded vertical pass over every column.
///
/// Reads the 3 channel `intermediate` and writes first three channels of `dst`.
pub fn vertical_sweep(
    intermediate: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    channels: FastBlurChannels,
    config: &StackBlurConfig,
    table: &DivisorTable,
) -> Result<(), BlurError> {
    check_slice_size(dst, width, height, channels.channels())?;
    check_intermediate(intermediate, width, height)?;
    check_table(config, table)?;
    let dst = UnsafeSlice::new(dst);
    match channels {
        FastBlurChannels::Channels3 => {
            VerticalStackBlurPass::<3>::new(intermediate, dst, width, height, config, table)
                .pass(0, 1)
        }
        FastBlurChannels::Channels4 => {
            VerticalStackBlurPass::<4>::new(intermediate, dst, width, height, config, table)
                .pass(0, 1)
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    /// Recomputes every window from scratch
    fn reference_line(line: &[u32], radius: u32) -> Vec<u32> {
        let last = line.len() as i64 - 1;
        let divsum = (radius + 1) * (radius + 1);
        (0..line.len() as i64)
            .map(|x| {
                let mut sum = 0u32;
                for i in -(radius as i64)..=radius as i64 {
                    let weight = radius + 1 - i.unsigned_abs() as u32;
                    sum += line[(x + i).clamp(0, last) as usize] * weight;
                }
                sum / divsum
            })
            .collect()
    }

    fn reference_blur(plane: &[u8], width: usize, height: usize, radius: u32) -> Vec<u8> {
        let mut rows = vec![0u32; width * height];
        for y in 0..height {
            let line: Vec<u32> = plane[y * width..(y + 1) * width]
                .iter()
                .map(|&v| v as u32)
                .collect();
            rows[y * width..(y + 1) * width].copy_from_slice(&reference_line(&line, radius));
        }
        let mut out = vec![0u8; width * height];
        for x in 0..width {
            let line: Vec<u32> = (0..height).map(|y| rows[y * width + x]).collect();
            for (y, v) in reference_line(&line, radius).into_iter().enumerate() {
                out[y * width + x] = v as u8;
            }
        }
        out
    }

    fn gray_to_rgb(plane: &[u8]) -> Vec<u8> {
        plane.iter().flat_map(|&v| [v, v, v]).collect()
    }

    fn noise(len: usize, seed: u32) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                (state >> 24) as u8
            })
            .collect()
    }

    const SAMPLE_5X5: [u8; 25] = [
        12, 40, 200, 33, 90, 255, 0, 17, 64, 128, 5, 99, 180, 240, 7, 60, 60, 10, 150, 220, 31,
        77, 140, 2, 250,
    ];

    #[test]
    fn test_flat_image_is_unchanged() {
        for radius in [1u32, 2, 5, 17, 100, 254] {
            for (channels, cn) in [
                (FastBlurChannels::Channels3, 3usize),
                (FastBlurChannels::Channels4, 4usize),
            ] {
                let width = 31usize;
                let height = 13usize;
                let pixel = [17u8, 128, 255, 77];
                let src: Vec<u8> = (0..width * height)
                    .flat_map(|_| pixel[..cn].to_vec())
                    .collect();
                let mut dst = src.clone();
                let mut image =
                    BlurImageMut::borrow(&mut dst, width as u32, height as u32, channels);
                stack_blur(&mut image, radius, ThreadingPolicy::Single).unwrap();
                assert_eq!(dst, src, "Flat image changed at radius {radius}");
            }
        }
    }

    #[test]
    fn test_single_pixel_is_unchanged() {
        for radius in [1u32, 3, 254] {
            let mut dst = vec![3u8, 99, 251, 40];
            let mut image = BlurImageMut::borrow(&mut dst, 1, 1, FastBlurChannels::Channels4);
            stack_blur(&mut image, radius, ThreadingPolicy::Single).unwrap();
            assert_eq!(dst, [3, 99, 251, 40]);
        }
    }

    #[test]
    fn test_impulse_radius_one_is_symmetric() {
        let mut plane = [0u8; 25];
        plane[12] = 255;
        let mut dst = gray_to_rgb(&plane);
        let mut image = BlurImageMut::borrow(&mut dst, 5, 5, FastBlurChannels::Channels3);
        stack_blur(&mut image, 1, ThreadingPolicy::Single).unwrap();
        let red: Vec<u8> = dst.chunks_exact(3).map(|px| px[0]).collect();
        #[rustfmt::skip]
        let expected = [
            0, 0, 0, 0, 0,
            0, 15, 31, 15, 0,
            0, 31, 63, 31, 0,
            0, 15, 31, 15, 0,
            0, 0, 0, 0, 0,
        ];
        assert_eq!(red, expected);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(red[y * 5 + x], red[y * 5 + (4 - x)]);
                assert_eq!(red[y * 5 + x], red[(4 - y) * 5 + x]);
                assert_eq!(red[y * 5 + x], red[x * 5 + y]);
            }
        }
    }

    #[test]
    fn test_max_value_row_has_no_banding() {
        for radius in 1..=12u32 {
            let mut dst = vec![255u8; 9 * 3];
            let mut image = BlurImageMut::borrow(&mut dst, 9, 1, FastBlurChannels::Channels3);
            stack_blur(&mut image, radius, ThreadingPolicy::Single).unwrap();
            assert!(dst.iter().all(|&v| v == 255), "Banding at radius {radius}");
        }
    }

    #[test]
    fn test_left_border_replicates_first_column() {
        let row = [10u8, 50, 90, 200];
        let mut dst = gray_to_rgb(&row);
        let mut image = BlurImageMut::borrow(&mut dst, 4, 1, FastBlurChannels::Channels3);
        stack_blur(&mut image, 2, ThreadingPolicy::Single).unwrap();
        // Offsets -2 and -1 read column 0: 10 * 1 + 10 * 2 + 10 * 3 + 50 * 2 + 90 * 1
        let manual = (10 + 10 * 2 + 10 * 3 + 50 * 2 + 90) / 9;
        assert_eq!(dst[0] as u32, manual);
        let red: Vec<u8> = dst.chunks_exact(3).map(|px| px[0]).collect();
        assert_eq!(red, [27, 62, 108, 158]);
    }

    #[test]
    fn test_sweeps_against_hand_computed_5x5() {
        let mut src = Vec::with_capacity(25 * 3);
        for &v in SAMPLE_5X5.iter() {
            src.extend_from_slice(&[v, 255 - v, v]);
        }
        let config = StackBlurConfig::new(2).unwrap();
        let table = DivisorTable::for_config(&config).unwrap();
        let mut intermediate = vec![0u8; 25 * 3];
        horizontal_sweep(
            &src,
            &mut intermediate,
            5,
            5,
            FastBlurChannels::Channels3,
            &config,
            &table,
        )
        .unwrap();

        #[rustfmt::skip]
        let expected_horizontal: [u8; 25] = [
            39, 65, 94, 89, 89,
            171, 95, 62, 67, 101,
            45, 101, 136, 133, 78,
            54, 58, 81, 132, 181,
            53, 67, 95, 123, 182,
        ];
        #[rustfmt::skip]
        let expected_horizontal_inv: [u8; 25] = [
            215, 189, 160, 165, 165,
            83, 159, 192, 187, 153,
            209, 153, 118, 121, 177,
            200, 196, 173, 122, 73,
            201, 187, 159, 131, 72,
        ];
        let red: Vec<u8> = intermediate.chunks_exact(3).map(|px| px[0]).collect();
        let green: Vec<u8> = intermediate.chunks_exact(3).map(|px| px[1]).collect();
        assert_eq!(red, expected_horizontal);
        assert_eq!(green, expected_horizontal_inv);

        let mut dst = vec![0u8; 25 * 3];
        vertical_sweep(
            &intermediate,
            &mut dst,
            5,
            5,
            FastBlurChannels::Channels3,
            &config,
            &table,
        )
        .unwrap();

        #[rustfmt::skip]
        let expected: [u8; 25] = [
            69, 75, 91, 89, 90,
            86, 82, 91, 96, 100,
            75, 82, 98, 112, 118,
            64, 74, 95, 122, 149,
            52, 68, 96, 126, 170,
        ];
        #[rustfmt::skip]
        let expected_inv: [u8; 25] = [
            185, 178, 162, 165, 163,
            168, 171, 162, 157, 153,
            178, 171, 155, 141, 135,
            189, 179, 158, 132, 104,
            201, 185, 157, 127, 83,
        ];
        let red: Vec<u8> = dst.chunks_exact(3).map(|px| px[0]).collect();
        let green: Vec<u8> = dst.chunks_exact(3).map(|px| px[1]).collect();
        assert_eq!(red, expected);
        assert_eq!(green, expected_inv);
        assert_eq!(red, reference_blur(&SAMPLE_5X5, 5, 5, 2));

        let mut in_place = src.clone();
        let mut image = BlurImageMut::borrow(&mut in_place, 5, 5, FastBlurChannels::Channels3);
        stack_blur(&mut image, 2, ThreadingPolicy::Single).unwrap();
        assert_eq!(in_place, dst);
    }

    #[test]
    fn test_matches_reference_oracle() {
        let cases = [(7usize, 3usize, 5u32), (40, 23, 1), (16, 64, 9), (3, 50, 30)];
        for (width, height, radius) in cases {
            let plane = noise(width * height, (width * 31 + height) as u32);
            let mut dst = gray_to_rgb(&plane);
            let mut image = BlurImageMut::borrow(
                &mut dst,
                width as u32,
                height as u32,
                FastBlurChannels::Channels3,
            );
            stack_blur(&mut image, radius, ThreadingPolicy::Single).unwrap();
            let red: Vec<u8> = dst.chunks_exact(3).map(|px| px[0]).collect();
            assert_eq!(
                red,
                reference_blur(&plane, width, height, radius),
                "Mismatch at {width}x{height} radius {radius}"
            );
        }
    }

    #[test]
    fn test_7x3_radius_exceeding_dimensions() {
        let plane: Vec<u8> = (0..3u32)
            .flat_map(|y| (0..7u32).map(move |x| ((x * 37 + y * 91) % 256) as u8))
            .collect();
        let mut dst = gray_to_rgb(&plane);
        let mut image = BlurImageMut::borrow(&mut dst, 7, 3, FastBlurChannels::Channels3);
        stack_blur(&mut image, 5, ThreadingPolicy::Single).unwrap();
        let red: Vec<u8> = dst.chunks_exact(3).map(|px| px[0]).collect();
        #[rustfmt::skip]
        let expected = [
            77, 87, 98, 112, 127, 141, 154,
            95, 99, 104, 112, 122, 132, 142,
            111, 110, 108, 111, 117, 125, 133,
        ];
        assert_eq!(red, expected);
    }

    #[test]
    fn test_blur_twice_is_not_idempotent() {
        let size = 21usize;
        let mut plane = vec![0u8; size * size];
        plane[10 * size + 10] = 255;
        let blur = |src: &[u8], radius: u32| -> Vec<u8> {
            let mut dst = gray_to_rgb(src);
            let mut image = BlurImageMut::borrow(
                &mut dst,
                size as u32,
                size as u32,
                FastBlurChannels::Channels3,
            );
            stack_blur(&mut image, radius, ThreadingPolicy::Single).unwrap();
            dst.chunks_exact(3).map(|px| px[0]).collect()
        };
        let once = blur(&plane, 2);
        let twice = blur(&once, 2);
        let wider = blur(&plane, 3);
        assert_ne!(once, twice);
        let distance = |a: &[u8], b: &[u8]| -> u32 {
            a.iter()
                .zip(b.iter())
                .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs())
                .sum()
        };
        // Two passes at radius 2 spread like a single radius 3 pass
        assert!(distance(&twice, &wider) < distance(&twice, &once));
        let max_diff = twice
            .iter()
            .zip(wider.iter())
            .map(|(&x, &y)| (x as i32 - y as i32).abs())
            .max()
            .unwrap();
        assert!(max_diff <= 3, "Max diff {max_diff}");
    }

    #[test]
    fn test_alpha_is_preserved() {
        let width = 6usize;
        let height = 4usize;
        let src: Vec<u8> = noise(width * height * 4, 7);
        let mut dst = src.clone();
        let mut image = BlurImageMut::borrow(
            &mut dst,
            width as u32,
            height as u32,
            FastBlurChannels::Channels4,
        );
        stack_blur(&mut image, 2, ThreadingPolicy::Single).unwrap();
        for (src, dst) in src.chunks_exact(4).zip(dst.chunks_exact(4)) {
            assert_eq!(src[3], dst[3]);
        }
        let rgb: Vec<u8> = src
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        let mut rgb_dst = rgb.clone();
        let mut image = BlurImageMut::borrow(
            &mut rgb_dst,
            width as u32,
            height as u32,
            FastBlurChannels::Channels3,
        );
        stack_blur(&mut image, 2, ThreadingPolicy::Single).unwrap();
        for (rgba, rgb) in dst.chunks_exact(4).zip(rgb_dst.chunks_exact(3)) {
            assert_eq!(&rgba[..3], rgb);
        }
    }

    #[test]
    fn test_multithreaded_matches_single() {
        let width = 97u32;
        let height = 61u32;
        let src = noise(width as usize * height as usize * 4, 11);
        let mut single = src.clone();
        let mut image =
            BlurImageMut::borrow(&mut single, width, height, FastBlurChannels::Channels4);
        stack_blur(&mut image, 13, ThreadingPolicy::Single).unwrap();
        let mut multi = src.clone();
        let mut image =
            BlurImageMut::borrow(&mut multi, width, height, FastBlurChannels::Channels4);
        let policy = ThreadingPolicy::Fixed(NonZeroUsize::new(5).unwrap());
        stack_blur(&mut image, 13, policy).unwrap();
        assert_eq!(single, multi);
    }

    #[test]
    fn test_stack_blur_into_copies_alpha() {
        let src_data = noise(8 * 5 * 4, 3);
        let src = BlurImage::borrow(&src_data, 8, 5, FastBlurChannels::Channels4);
        let mut dst = BlurImageMut::default();
        stack_blur_into(&src, &mut dst, 4, ThreadingPolicy::Single).unwrap();
        let mut expected = src_data.clone();
        let mut image = BlurImageMut::borrow(&mut expected, 8, 5, FastBlurChannels::Channels4);
        stack_blur(&mut image, 4, ThreadingPolicy::Single).unwrap();
        assert_eq!(dst.data.borrow(), expected.as_slice());
    }

    #[test]
    fn test_invalid_requests_fail_fast() {
        let mut data = vec![7u8; 4 * 4 * 3];
        let mut image = BlurImageMut::borrow(&mut data, 4, 4, FastBlurChannels::Channels3);
        assert_eq!(
            stack_blur(&mut image, 0, ThreadingPolicy::Single),
            Err(BlurError::InvalidRadius(0))
        );
        assert_eq!(
            stack_blur(&mut image, 255, ThreadingPolicy::Single),
            Err(BlurError::InvalidRadius(255))
        );

        let mut image = BlurImageMut::borrow(&mut data, 4, 5, FastBlurChannels::Channels3);
        assert!(matches!(
            stack_blur(&mut image, 2, ThreadingPolicy::Single),
            Err(BlurError::MinimumSliceSizeMismatch(_))
        ));

        let mut image = BlurImageMut::borrow(&mut data, 0, 4, FastBlurChannels::Channels3);
        assert_eq!(
            stack_blur(&mut image, 2, ThreadingPolicy::Single),
            Err(BlurError::ZeroBaseSize)
        );
        assert!(data.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_intermediate_and_table_validation() {
        let mut data = vec![7u8; 4 * 4 * 4];
        let mut image = BlurImageMut::borrow(&mut data, 4, 4, FastBlurChannels::Channels4);
        let config = StackBlurConfig::new(3).unwrap();
        let table = DivisorTable::for_config(&config).unwrap();

        let mut short = vec![0u8; 4 * 4 * 4];
        assert_eq!(
            stack_blur_with_intermediate(
                &mut image,
                &mut short,
                &config,
                &table,
                ThreadingPolicy::Single
            ),
            Err(BlurError::IntermediateSizeMismatch(MismatchedSize {
                expected: 48,
                received: 64,
            }))
        );

        let mut intermediate = vec![0u8; 4 * 4 * 3];
        let other = DivisorTable::new(4).unwrap();
        assert_eq!(
            stack_blur_with_intermediate(
                &mut image,
                &mut intermediate,
                &config,
                &other,
                ThreadingPolicy::Single
            ),
            Err(BlurError::DivisorTableMismatch(MismatchedSize {
                expected: 16,
                received: 4,
            }))
        );
        assert!(stack_blur_with_intermediate(
            &mut image,
            &mut intermediate,
            &config,
            &table,
            ThreadingPolicy::Single
        )
        .is_ok());
        assert!(data.iter().all(|&v| v == 7));
    }
}
