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
use crate::BlurError;

/// Largest supported radius.
///
/// Stack pointers and the `radius + 1` weight are kept in 16 and 8 bits by
/// the reference kernel, which bounds the radius to 254.
pub const MAX_RADIUS: u32 = 254;

/// Per-request stack blur parameters.
///
/// `div` and `divsum` are always derived from `radius` and can't be set on their own.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StackBlurConfig {
    radius: u32,
    div: u32,
    divsum: u32,
}

impl StackBlurConfig {
    /// Creates configuration for `radius` in `1..=MAX_RADIUS`.
    pub fn new(radius: u32) -> Result<StackBlurConfig, BlurError> {
        if radius == 0 || radius > MAX_RADIUS {
            return Err(BlurError::InvalidRadius(radius));
        }
        let div = radius * 2 + 1;
        let half = (div + 1) / 2;
        let config = StackBlurConfig {
            radius,
            div,
            divsum: half * half,
        };
        tracing::debug!(radius, div, divsum = config.divsum, "stack blur config");
        Ok(config)
    }

    /// Creates configuration clamping `radius` into `1..=MAX_RADIUS`.
    pub fn clamped(radius: u32) -> StackBlurConfig {
        #[allow(clippy::manual_clamp)]
        let radius = radius.max(1).min(MAX_RADIUS);
        StackBlurConfig {
            radius,
            div: radius * 2 + 1,
            divsum: (radius + 1) * (radius + 1),
        }
    }

    /// Radius for an image downsampled by `scale`, rounded and clamped.
    ///
    /// Non finite or non positive scales are treated as 1.
    pub fn scaled(radius: u32, scale: f32) -> StackBlurConfig {
        let scale = if scale.is_finite() && scale > 0. {
            scale
        } else {
            1.
        };
        let scaled = (radius as f32 * scale).round();
        StackBlurConfig::clamped(scaled.min(MAX_RADIUS as f32) as u32)
    }

    /// Blur kernel half width
    #[inline]
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Stack elements count, `2 * radius + 1`
    #[inline]
    pub const fn div(&self) -> u32 {
        self.div
    }

    /// Sum of all triangular weights, `(radius + 1)^2`
    #[inline]
    pub const fn divsum(&self) -> u32 {
        self.divsum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_values() {
        let config = StackBlurConfig::new(3).unwrap();
        assert_eq!(config.radius(), 3);
        assert_eq!(config.div(), 7);
        assert_eq!(config.divsum(), 16);
        let config = StackBlurConfig::new(1).unwrap();
        assert_eq!(config.div(), 3);
        assert_eq!(config.divsum(), 4);
    }

    #[test]
    fn test_invalid_radius() {
        assert_eq!(StackBlurConfig::new(0), Err(BlurError::InvalidRadius(0)));
        assert_eq!(
            StackBlurConfig::new(MAX_RADIUS + 1),
            Err(BlurError::InvalidRadius(MAX_RADIUS + 1))
        );
        assert!(StackBlurConfig::new(MAX_RADIUS).is_ok());
    }

    #[test]
    fn test_clamped_matches_new() {
        assert_eq!(StackBlurConfig::clamped(0), StackBlurConfig::new(1).unwrap());
        assert_eq!(
            StackBlurConfig::clamped(10_000),
            StackBlurConfig::new(MAX_RADIUS).unwrap()
        );
        assert_eq!(StackBlurConfig::clamped(17), StackBlurConfig::new(17).unwrap());
    }

    #[test]
    fn test_scaled() {
        assert_eq!(StackBlurConfig::scaled(40, 0.25).radius(), 10);
        assert_eq!(StackBlurConfig::scaled(2, 0.25).radius(), 1);
        assert_eq!(StackBlurConfig::scaled(6, 0.25).radius(), 2);
        assert_eq!(StackBlurConfig::scaled(u32::MAX, 0.5).radius(), MAX_RADIUS);
        assert_eq!(StackBlurConfig::scaled(5, f32::NAN).radius(), 5);
    }
}
