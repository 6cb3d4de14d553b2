//! Backing storage for [`Matrix`](super::Matrix): owned buffers and aliasing views.
//!
//! Every matrix addresses its backing buffer through one affine rule: logical
//! flat index `k = i * Cols + j` lives at slot `k * stride + offset`. An owning
//! matrix is the degenerate case `stride = 1, offset = 0`.
//!
//! Buffers are `Rc<[Cell<T>]>`. A view keeps its buffer alive for as long as
//! the view exists, and a write through any alias is immediately visible
//! through every other alias. There is no copy-on-write. `Rc` and `Cell` make
//! matrices `!Send` and `!Sync`, so aliased buffers cannot be shared across
//! threads at all.

use std::cell::Cell;
use std::rc::Rc;

pub(crate) type Buffer<T> = Rc<[Cell<T>]>;

pub(crate) enum Storage<T> {
    /// Row-major buffer allocated by this matrix. Views taken from it share the `Rc`.
    Owned(Buffer<T>),
    /// Borrowed window into another matrix's buffer.
    View {
        buf: Buffer<T>,
        stride: usize,
        offset: usize,
    },
}

impl<T: Copy> Storage<T> {
    pub(crate) fn owned<I: IntoIterator<Item = T>>(values: I) -> Self {
        Storage::Owned(values.into_iter().map(Cell::new).collect())
    }

    pub(crate) fn buffer(&self) -> &Buffer<T> {
        match self {
            Storage::Owned(buf) => buf,
            Storage::View { buf, .. } => buf,
        }
    }

    pub(crate) fn stride(&self) -> usize {
        match self {
            Storage::Owned(_) => 1,
            Storage::View { stride, .. } => *stride,
        }
    }

    pub(crate) fn offset(&self) -> usize {
        match self {
            Storage::Owned(_) => 0,
            Storage::View { offset, .. } => *offset,
        }
    }

    pub(crate) fn is_view(&self) -> bool {
        matches!(self, Storage::View { .. })
    }

    /// Buffer slot of logical flat index `k`.
    #[inline]
    pub(crate) fn address(&self, k: usize) -> usize {
        k * self.stride() + self.offset()
    }

    #[inline]
    pub(crate) fn get(&self, k: usize) -> T {
        self.buffer()[self.address(k)].get()
    }

    #[inline]
    pub(crate) fn set(&self, k: usize, value: T) {
        self.buffer()[self.address(k)].set(value)
    }

    /// Alias a sub-window of this storage. `step` and `start` are expressed in
    /// this storage's logical flat indices and compose with its own stride.
    ///
    /// The window must satisfy `start + (len - 1) * step < self_len`; the
    /// resulting buffer bound is checked in debug builds.
    pub(crate) fn window(&self, step: usize, start: usize, len: usize) -> Self {
        let stride = step * self.stride();
        let offset = self.address(start);
        debug_assert!(
            len == 0 || offset + (len - 1) * stride < self.buffer().len(),
            "view exceeds backing buffer"
        );
        Storage::View {
            buf: Rc::clone(self.buffer()),
            stride,
            offset,
        }
    }

    /// Fresh owned copy of the first `len` logical elements.
    pub(crate) fn deep_copy(&self, len: usize) -> Self {
        Storage::owned((0..len).map(|k| self.get(k)))
    }
}
