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

use libfuzzer_sys::fuzz_target;
use stackblur::{stack_blur, BlurImageMut, FastBlurChannels, ThreadingPolicy, MAX_RADIUS};

fuzz_target!(|data: (u8, u8, u8, u8)| {
    fuzz_image(
        data.0 as usize,
        data.1 as usize,
        data.2 as u32,
        data.3,
        FastBlurChannels::Channels4,
    );
    fuzz_image(
        data.0 as usize,
        data.1 as usize,
        data.2 as u32,
        data.3,
        FastBlurChannels::Channels3,
    );
});

fn fuzz_image(width: usize, height: usize, radius: u32, value: u8, channels: FastBlurChannels) {
    if width == 0 || height == 0 || radius == 0 || radius > MAX_RADIUS {
        return;
    }

    let src = vec![value; width * height * channels.channels()];
    let mut dst = src.clone();
    let mut dst_image = BlurImageMut::borrow(&mut dst, width as u32, height as u32, channels);

    stack_blur(&mut dst_image, radius, ThreadingPolicy::Single).unwrap();
    assert_eq!(src, dst);
}
