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
use crate::StackBlurConfig;

/// Circular stack of `div` samples with its running sums.
///
/// After every step `sum` equals the triangularly weighted sum of the window,
/// `sum_out` holds the center and the samples behind it, `sum_in` the samples
/// ahead of the center.
pub(crate) struct BlurStack {
    slots: Vec<SlidingWindow<u32>>,
    radius: usize,
    div: usize,
    pointer: usize,
    sum: SlidingWindow<u32>,
    sum_in: SlidingWindow<u32>,
    sum_out: SlidingWindow<u32>,
}

impl BlurStack {
    pub(crate) fn new(config: &StackBlurConfig) -> BlurStack {
        let radius = config.radius() as usize;
        let div = config.div() as usize;
        BlurStack {
            slots: vec![SlidingWindow::default(); div],
            radius,
            div,
            pointer: radius,
            sum: SlidingWindow::default(),
            sum_in: SlidingWindow::default(),
            sum_out: SlidingWindow::default(),
        }
    }

    /// Loads the window centered on index 0 of a line with last index `last`.
    ///
    /// Offsets outside of `0..=last` are clamped to the border sample.
    #[inline]
    pub(crate) fn prime(
        &mut self,
        last: usize,
        mut fetch: impl FnMut(usize) -> SlidingWindow<u32>,
    ) {
        self.sum = SlidingWindow::default();
        self.sum_in = SlidingWindow::default();
        self.sum_out = SlidingWindow::default();

        let radius = self.radius;
        let div = self.div;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let src = fetch(i.saturating_sub(radius).min(last));
            *slot = src;
            let weight = if i <= radius { i + 1 } else { div - i };
            self.sum += src * weight as u32;
            if i > radius {
                self.sum_in += src;
            } else {
                self.sum_out += src;
            }
        }
        self.pointer = radius;
    }

    #[inline(always)]
    pub(crate) fn sum(&self) -> SlidingWindow<u32> {
        self.sum
    }

    /// Moves the window one sample forward, `incoming` enters at the leading edge.
    #[inline(always)]
    pub(crate) fn push(&mut self, incoming: SlidingWindow<u32>) {
        self.sum -= self.sum_out;

        let mut stack_start = self.pointer + self.div - self.radius;
        if stack_start >= self.div {
            stack_start -= self.div;
        }
        let slot = &mut self.slots[stack_start];
        self.sum_out -= *slot;
        *slot = incoming;

        self.sum_in += incoming;
        self.sum += self.sum_in;

        self.pointer += 1;
        if self.pointer >= self.div {
            self.pointer = 0;
        }
        let center = self.slots[self.pointer];
        self.sum_out += center;
        self.sum_in -= center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_sum(line: &[u32], center: usize, radius: usize) -> u32 {
        let last = line.len() as isize - 1;
        let mut sum = 0;
        for i in -(radius as isize)..=radius as isize {
            let idx = (center as isize + i).clamp(0, last) as usize;
            sum += line[idx] * (radius as u32 + 1 - i.unsigned_abs() as u32);
        }
        sum
    }

    #[test]
    fn test_running_sum_matches_window() {
        let line: Vec<u32> = vec![3, 250, 17, 0, 99, 128, 255, 1, 64, 200, 7];
        for radius in 1..=6u32 {
            let config = StackBlurConfig::new(radius).unwrap();
            let mut stack = BlurStack::new(&config);
            let last = line.len() - 1;
            let fetch = |x: usize| SlidingWindow::from_components(line[x], line[x], 255 - line[x]);
            stack.prime(last, fetch);
            for x in 0..line.len() {
                let expected = weighted_sum(&line, x, radius as usize);
                assert_eq!(stack.sum().r, expected, "radius {radius} at {x}");
                assert_eq!(stack.sum().g, expected);
                let inverted: Vec<u32> = line.iter().map(|&v| 255 - v).collect();
                assert_eq!(stack.sum().b, weighted_sum(&inverted, x, radius as usize));
                stack.push(fetch((x + radius as usize + 1).min(last)));
            }
        }
    }

    #[test]
    fn test_prime_resets_previous_line() {
        let config = StackBlurConfig::new(2).unwrap();
        let mut stack = BlurStack::new(&config);
        stack.prime(0, |_| SlidingWindow::from_components(200, 200, 200));
        stack.push(SlidingWindow::from_components(200, 200, 200));
        stack.prime(0, |_| SlidingWindow::from_components(1, 2, 3));
        assert_eq!(stack.sum(), SlidingWindow::from_components(9, 18, 27));
    }
}
