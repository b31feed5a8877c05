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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stackblur::{
    horizontal_sweep, stack_blur, vertical_sweep, BlurImageMut, DivisorTable, FastBlurChannels,
    StackBlurConfig, ThreadingPolicy, MAX_RADIUS,
};

#[derive(Arbitrary, Debug)]
struct Input {
    width: u8,
    height: u8,
    radius: u8,
    rgba: bool,
    pixels: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let width = input.width as u32;
    let height = input.height as u32;
    let channels = if input.rgba {
        FastBlurChannels::Channels4
    } else {
        FastBlurChannels::Channels3
    };
    let len = width as usize * height as usize * channels.channels();
    let radius = input.radius as u32;
    if len == 0 || input.pixels.is_empty() || radius == 0 || radius > MAX_RADIUS {
        return;
    }
    let src: Vec<u8> = input.pixels.iter().copied().cycle().take(len).collect();

    let config = StackBlurConfig::new(radius).unwrap();
    let table = DivisorTable::for_config(&config).unwrap();
    let mut intermediate = vec![0u8; width as usize * height as usize * 3];
    let mut swept = src.clone();
    horizontal_sweep(&src, &mut intermediate, width, height, channels, &config, &table).unwrap();
    vertical_sweep(&intermediate, &mut swept, width, height, channels, &config, &table).unwrap();

    let mut blurred = src.clone();
    let mut image = BlurImageMut::borrow(&mut blurred, width, height, channels);
    stack_blur(&mut image, radius, ThreadingPolicy::Adaptive).unwrap();

    assert_eq!(swept, blurred);
});
