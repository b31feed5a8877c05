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
use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BlurError {
    ZeroBaseSize,
    InvalidRadius(u32),
    ZeroDivisorSum,
    DivisorTableMismatch(MismatchedSize),
    MinimumSliceSizeMismatch(MismatchedSize),
    IntermediateSizeMismatch(MismatchedSize),
    ImagesMustMatch,
    ExceedingPointerSize,
    ThreadPool,
    UnsupportedImageType,
    InvalidArguments,
}

impl Error for BlurError {}

impl std::fmt::Display for BlurError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BlurError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            BlurError::InvalidRadius(radius) => f.write_fmt(format_args!(
                "Radius must be in range 1..={}, but received {radius}",
                crate::MAX_RADIUS
            )),
            BlurError::ZeroDivisorSum => f.write_str("Divisor sum must not be zero"),
            BlurError::DivisorTableMismatch(size) => f.write_fmt(format_args!(
                "Divisor table was built for divsum={}, but radius requires {}",
                size.received, size.expected
            )),
            BlurError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            BlurError::IntermediateSizeMismatch(size) => f.write_fmt(format_args!(
                "Intermediate buffer size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            BlurError::ImagesMustMatch => {
                f.write_str("Source and destination images must match in their dimensions")
            }
            BlurError::ExceedingPointerSize => {
                f.write_str("Image bounds exceeds pointer capacity")
            }
            BlurError::ThreadPool => f.write_str("Failed to create worker thread pool"),
            BlurError::UnsupportedImageType => f.write_str("Unsupported image pixel type"),
            BlurError::InvalidArguments => f.write_str("Invalid arguments"),
        }
    }
}

/// Returns `width * height * cn` or an error if it doesn't fit into `usize`.
pub(crate) fn checked_image_len(width: u32, height: u32, cn: usize) -> Result<usize, BlurError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|x| x.checked_mul(cn))
        .ok_or(BlurError::ExceedingPointerSize)
}

pub(crate) fn check_slice_size<T>(
    arr: &[T],
    width: u32,
    height: u32,
    cn: usize,
) -> Result<(), BlurError> {
    if width == 0 || height == 0 {
        return Err(BlurError::ZeroBaseSize);
    }
    let expected = checked_image_len(width, height, cn)?;
    if arr.len() != expected {
        return Err(BlurError::MinimumSliceSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}
