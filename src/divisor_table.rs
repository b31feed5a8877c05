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
use crate::{BlurError, StackBlurConfig};

/// Largest 8-bit channel value.
pub(crate) const MAX_CHANNEL_VALUE: u32 = u8::MAX as u32;

/// Lookup table replacing per pixel division of the weighted sum by `divsum`.
///
/// Entry `x` holds `x / divsum`. No weighted sum of 8-bit samples exceeds
/// `divsum * 255`, so every lookup is in bounds and fits into `u8`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DivisorTable {
    divsum: u32,
    table: Vec<u8>,
}

impl DivisorTable {
    pub fn new(divsum: u32) -> Result<DivisorTable, BlurError> {
        if divsum == 0 {
            return Err(BlurError::ZeroDivisorSum);
        }
        let len = (divsum as usize)
            .checked_mul(MAX_CHANNEL_VALUE as usize)
            .and_then(|x| x.checked_add(1))
            .ok_or(BlurError::ExceedingPointerSize)?;
        let table = (0..len).map(|x| (x / divsum as usize) as u8).collect();
        tracing::debug!(divsum, len, "divisor table built");
        Ok(DivisorTable { divsum, table })
    }

    /// Table for the configuration's `divsum`
    pub fn for_config(config: &StackBlurConfig) -> Result<DivisorTable, BlurError> {
        DivisorTable::new(config.divsum())
    }

    #[inline]
    pub fn divsum(&self) -> u32 {
        self.divsum
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }

    /// Divides a weighted sum, `sum` must not exceed `divsum * 255`.
    #[inline(always)]
    pub(crate) fn divide(&self, sum: u32) -> u8 {
        debug_assert!((sum as usize) < self.table.len());
        unsafe { *self.table.get_unchecked(sum as usize) }
    }
}
