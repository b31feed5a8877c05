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
use crate::stackblur::{stack_blur_with_intermediate, INTERMEDIATE_CHANNELS};
use crate::util::checked_image_len;
use crate::{BlurError, BlurImageMut, DivisorTable, StackBlurConfig, ThreadingPolicy};

/// Keeps the divisor table and the intermediate buffer alive between blur requests.
///
/// The table is rebuilt only when the radius changes and the intermediate buffer
/// is reallocated only when the image dimensions change.
#[derive(Debug, Clone)]
pub struct StackBlurContext {
    config: StackBlurConfig,
    table: DivisorTable,
    intermediate: Vec<u8>,
}

impl StackBlurContext {
    pub fn new(radius: u32) -> Result<StackBlurContext, BlurError> {
        StackBlurContext::with_config(StackBlurConfig::new(radius)?)
    }

    pub fn with_config(config: StackBlurConfig) -> Result<StackBlurContext, BlurError> {
        Ok(StackBlurContext {
            table: DivisorTable::for_config(&config)?,
            config,
            intermediate: Vec::new(),
        })
    }

    /// Changes the radius, returns `true` if the divisor table was rebuilt.
    pub fn set_radius(&mut self, radius: u32) -> Result<bool, BlurError> {
        if radius == self.config.radius() {
            return Ok(false);
        }
        let config = StackBlurConfig::new(radius)?;
        self.table = DivisorTable::for_config(&config)?;
        self.config = config;
        Ok(true)
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.config.radius()
    }

    #[inline]
    pub fn config(&self) -> &StackBlurConfig {
        &self.config
    }

    #[inline]
    pub fn divisor_table(&self) -> &DivisorTable {
        &self.table
    }

    /// Blurs `image` in place with the current radius.
    pub fn blur(
        &mut self,
        image: &mut BlurImageMut<u8>,
        threading_policy: ThreadingPolicy,
    ) -> Result<(), BlurError> {
        image.check_layout(None)?;
        let required = checked_image_len(image.width, image.height, INTERMEDIATE_CHANNELS)?;
        if self.intermediate.len() != required {
            tracing::debug!(
                width = image.width,
                height = image.height,
                "reallocating intermediate buffer"
            );
            self.intermediate.resize(required, 0);
        }
        stack_blur_with_intermediate(
            image,
            &mut self.intermediate,
            &self.config,
            &self.table,
            threading_policy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{stack_blur, FastBlurChannels};

    fn pattern(width: u32, height: u32) -> Vec<u8> {
        (0..width * height * 4).map(|i| (i * 7 % 251) as u8).collect()
    }

    #[test]
    fn test_set_radius_rebuilds_only_on_change() {
        let mut context = StackBlurContext::new(4).unwrap();
        assert_eq!(context.divisor_table().divsum(), 25);
        assert_eq!(context.set_radius(4), Ok(false));
        assert_eq!(context.set_radius(6), Ok(true));
        assert_eq!(context.radius(), 6);
        assert_eq!(context.divisor_table().divsum(), 49);
        assert_eq!(context.set_radius(0), Err(BlurError::InvalidRadius(0)));
        assert_eq!(context.radius(), 6);
    }

    #[test]
    fn test_context_matches_one_shot_blur() {
        let mut context = StackBlurContext::new(3).unwrap();
        for (width, height) in [(12u32, 9u32), (5, 20), (12, 9)] {
            let mut expected = pattern(width, height);
            let mut image =
                BlurImageMut::borrow(&mut expected, width, height, FastBlurChannels::Channels4);
            stack_blur(&mut image, 3, ThreadingPolicy::Single).unwrap();

            let mut actual = pattern(width, height);
            let mut image =
                BlurImageMut::borrow(&mut actual, width, height, FastBlurChannels::Channels4);
            context.blur(&mut image, ThreadingPolicy::Single).unwrap();
            assert_eq!(actual, expected, "Mismatch at {width}x{height}");
        }
    }
}
