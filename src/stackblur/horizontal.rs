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
use crate::stackblur::sliding_window::SlidingWindow;
use crate::stackblur::stack::BlurStack;
use crate::stackblur::stack_blur_pass::{worker_range, StackBlurWorkingPass};
use crate::unsafe_slice::UnsafeSlice;
use crate::{DivisorTable, StackBlurConfig};

/// Row sweep: reads `CN` channel source, writes the 3 channel intermediate buffer.
pub(crate) struct HorizontalStackBlurPass<'a, const CN: usize> {
    src: &'a [u8],
    dst: UnsafeSlice<'a, u8>,
    width: u32,
    height: u32,
    config: &'a StackBlurConfig,
    table: &'a DivisorTable,
}

impl<'a, const CN: usize> HorizontalStackBlurPass<'a, CN> {
    /// `src` must hold `width * height * CN` and `dst` `width * height * 3` items.
    pub(crate) fn new(
        src: &'a [u8],
        dst: UnsafeSlice<'a, u8>,
        width: u32,
        height: u32,
        config: &'a StackBlurConfig,
        table: &'a DivisorTable,
    ) -> Self {
        debug_assert_eq!(src.len(), width as usize * height as usize * CN);
        debug_assert_eq!(dst.len(), width as usize * height as usize * 3);
        HorizontalStackBlurPass {
            src,
            dst,
            width,
            height,
            config,
            table,
        }
    }

    #[inline]
    fn blur_rows(&self, rows: std::ops::Range<usize>) {
        let mut stack = BlurStack::new(self.config);
        let width = self.width as usize;
        let wm = width - 1;
        let r1 = self.config.radius() as usize + 1;

        for y in rows {
            let src_row = &self.src[y * width * CN..(y + 1) * width * CN];
            let fetch = |x: usize| -> SlidingWindow<u32> {
                SlidingWindow::from_store(src_row, x * CN)
            };

            stack.prime(wm, fetch);

            let mut dst_ptr = y * width * 3;
            for x in 0..width {
                let sum = stack.sum();
                unsafe {
                    self.dst.write(dst_ptr, self.table.divide(sum.r));
                    self.dst.write(dst_ptr + 1, self.table.divide(sum.g));
                    self.dst.write(dst_ptr + 2, self.table.divide(sum.b));
                }
                dst_ptr += 3;

                stack.push(fetch((x + r1).min(wm)));
            }
        }
    }
}

impl<const CN: usize> StackBlurWorkingPass for HorizontalStackBlurPass<'_, CN> {
    fn pass(&self, thread: usize, total_threads: usize) {
        self.blur_rows(worker_range(self.height, thread, total_threads));
    }
}
