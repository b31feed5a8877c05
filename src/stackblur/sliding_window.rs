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
use num_traits::AsPrimitive;
use std::ops::{AddAssign, Mul, SubAssign};

/// Per channel accumulator for the three blurred channels.
#[repr(C)]
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Copy, Default)]
pub(crate) struct SlidingWindow<J: Copy> {
    pub r: J,
    pub g: J,
    pub b: J,
}

impl<J> SlidingWindow<J>
where
    J: Copy + Default + 'static,
{
    #[inline]
    pub fn from_components(r: J, g: J, b: J) -> SlidingWindow<J> {
        SlidingWindow { r, g, b }
    }

    /// Loads the first three channels of the pixel starting at `offset`
    #[inline(always)]
    pub fn from_store<T>(store: &[T], offset: usize) -> SlidingWindow<J>
    where
        T: AsPrimitive<J>,
    {
        let px = &store[offset..offset + 3];
        SlidingWindow {
            r: px[0].as_(),
            g: px[1].as_(),
            b: px[2].as_(),
        }
    }
}

impl<J> Mul<J> for SlidingWindow<J>
where
    J: Copy + Mul<Output = J>,
{
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: J) -> Self::Output {
        SlidingWindow {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl<J> AddAssign<SlidingWindow<J>> for SlidingWindow<J>
where
    J: Copy + AddAssign,
{
    #[inline(always)]
    fn add_assign(&mut self, rhs: SlidingWindow<J>) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl<J> SubAssign<SlidingWindow<J>> for SlidingWindow<J>
where
    J: Copy + SubAssign,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: SlidingWindow<J>) {
        self.r -= rhs.r;
        self.g -= rhs.g;
        self.b -= rhs.b;
    }
}
