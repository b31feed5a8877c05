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
use crate::util::{check_slice_size, checked_image_len};
use crate::{BlurError, FastBlurChannels};
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn resize(&mut self, new_size: usize, value: T) {
        match self {
            Self::Borrowed(_) => {}
            Self::Owned(vec) => vec.resize(new_size, value),
        }
    }
}

/// Immutable image store, tightly packed rows
pub struct BlurImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: u32,
    pub height: u32,
    pub channels: FastBlurChannels,
}

/// Mutable image store, tightly packed rows
/// If it owns vector it does auto resizing on methods that working out-of-place.
pub struct BlurImageMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: BufferStore<'a, T>,
    pub width: u32,
    pub height: u32,
    pub channels: FastBlurChannels,
}

impl<T: Clone + Copy + Default + Debug> Default for BlurImageMut<'_, T> {
    fn default() -> Self {
        BlurImageMut {
            data: BufferStore::Owned(Vec::new()),
            width: 0,
            height: 0,
            channels: FastBlurChannels::Channels3,
        }
    }
}

impl<'a, T: Clone + Copy + Default + Debug> BlurImage<'a, T> {
    /// Allocates default image layout for given [FastBlurChannels]
    pub fn alloc(width: u32, height: u32, channels: FastBlurChannels) -> Self {
        Self {
            data: std::borrow::Cow::Owned(vec![
                T::default();
                width as usize
                    * height as usize
                    * channels.channels()
            ]),
            width,
            height,
            channels,
        }
    }

    /// Borrows existing data
    pub fn borrow(arr: &'a [T], width: u32, height: u32, channels: FastBlurChannels) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            channels,
        }
    }

    /// Checks that data length is exactly `width * height * channels`
    #[inline]
    pub fn check_layout(&self) -> Result<(), BlurError> {
        check_slice_size(
            self.data.as_ref(),
            self.width,
            self.height,
            self.channels.channels(),
        )
    }

    /// Checks if it is matches the size of the other image
    #[inline]
    pub fn size_matches_mut(&self, other: &BlurImageMut<'_, T>) -> Result<(), BlurError> {
        if self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
        {
            return Ok(());
        }
        Err(BlurError::ImagesMustMatch)
    }

    /// Deep copy immutable image to mutable
    pub fn copy_to_mut(&self, dst: &mut BlurImageMut<T>) -> Result<(), BlurError> {
        self.check_layout()?;
        dst.check_layout(Some(self))?;
        self.size_matches_mut(dst)?;
        dst.data.borrow_mut().copy_from_slice(self.data.as_ref());
        Ok(())
    }

    /// Deep clone as mutable image
    pub fn clone_as_mut<'f>(&self) -> BlurImageMut<'f, T> {
        BlurImageMut {
            data: BufferStore::Owned(self.data.to_vec()),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

impl<'a, T: Clone + Copy + Default + Debug> BlurImageMut<'a, T> {
    /// Allocates default image layout for given [FastBlurChannels]
    pub fn alloc(width: u32, height: u32, channels: FastBlurChannels) -> Self {
        Self {
            data: BufferStore::Owned(vec![
                T::default();
                width as usize * height as usize * channels.channels()
            ]),
            width,
            height,
            channels,
        }
    }

    /// Mutable borrows existing data
    pub fn borrow(arr: &'a mut [T], width: u32, height: u32, channels: FastBlurChannels) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            channels,
        }
    }

    /// Checks if layout matches necessary requirements.
    ///
    /// Owned storage is resized to match `other` when it is provided.
    #[inline]
    pub fn check_layout(&mut self, other: Option<&BlurImage<'_, T>>) -> Result<(), BlurError> {
        if let Some(other) = other {
            if matches!(self.data, BufferStore::Owned(_)) {
                checked_image_len(other.width, other.height, other.channels.channels())?;
                self.resize(other.width, other.height, other.channels);
            }
        }
        check_slice_size(
            self.data.borrow(),
            self.width,
            self.height,
            self.channels.channels(),
        )
    }

    #[inline]
    pub fn to_immutable_ref(&self) -> BlurImage<'_, T> {
        BlurImage {
            data: std::borrow::Cow::Borrowed(self.data.borrow()),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    #[inline]
    pub fn resize(&mut self, width: u32, height: u32, channels: FastBlurChannels) {
        self.height = height;
        self.width = width;
        self.channels = channels;
        self.data.resize(
            self.width as usize * self.height as usize * self.channels.channels(),
            T::default(),
        );
    }
}
