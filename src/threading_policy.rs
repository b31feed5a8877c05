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
use std::{num::NonZeroUsize, thread::available_parallelism};

/// Pixels count handled by one worker before another one is worth spawning.
const PIXELS_PER_WORKER: usize = 256 * 256;

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Set threading policy.
pub enum ThreadingPolicy {
    /// Use only one thread, current is preferred.
    Single,
    /// Compute adaptive thread count between 1..available CPUs.
    #[default]
    Adaptive,
    /// Like `Adaptive`, but reserve given amount of threads (i.e. those will not be
    /// used).
    AdaptiveReserve(NonZeroUsize),
    /// Use specified number of threads.
    Fixed(NonZeroUsize),
}

impl ThreadingPolicy {
    /// Returns the number of workers to use for the given image dimensions under the
    /// selected policy variant.
    ///
    /// Rows are the unit of work for the horizontal pass and columns for the vertical one,
    /// so the result never exceeds the smaller dimension. Always at least 1.
    pub fn thread_count(&self, width: u32, height: u32) -> usize {
        let pixels = width as usize * height as usize;
        let units = (width.min(height) as usize).max(1);
        let count = match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Adaptive => {
                (pixels / PIXELS_PER_WORKER).clamp(1, Self::available_parallelism(2))
            }
            ThreadingPolicy::AdaptiveReserve(reserve) => {
                let max_threads = Self::available_parallelism(1);
                let allowed = max_threads.saturating_sub(reserve.get()).max(1);
                (pixels / PIXELS_PER_WORKER).clamp(1, allowed)
            }
            ThreadingPolicy::Fixed(fixed) => fixed.get(),
        };
        count.min(units)
    }

    // At least on single core CPU have 2 threads is beneficial
    fn available_parallelism(min: usize) -> usize {
        available_parallelism()
            .map(|x| x.get())
            .unwrap_or(1)
            .max(min)
    }
}
