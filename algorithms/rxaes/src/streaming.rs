//! Streaming Hasher
//!
//! Incremental form of [`crate::hash`]: input may arrive in chunks of any size,
//! partial blocks are buffered until the next update completes them.

use crate::engine::dispatcher::{self, Backend};
use crate::engine::HASH_INIT_STATE;
use crate::kernels::constants::BLOCK_SIZE;
use crate::types::{Block, Digest, LengthError, State};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental hasher with a constant-size buffer.
///
/// The digest equals [`crate::hash`] over the concatenation of every update.
///
/// # Example
/// ```rust
/// let data = [42u8; 192];
/// let mut hasher = rxaes::Hasher::new();
/// for chunk in data.chunks(50) {
///     hasher.update(chunk);
/// }
/// assert_eq!(hasher.finalize(), rxaes::hash(&data));
/// ```
#[derive(Clone, Debug)]
pub struct Hasher {
    backend: Backend,
    /// Running hash lanes
    state: State,
    /// Partial block (only the first `pending_len` bytes are meaningful)
    pending: Block,
    pending_len: usize,
    /// Total bytes absorbed
    total: usize,
}

impl Hasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher on the fastest backend for this CPU.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(dispatcher::get_best_backend())
    }

    /// Create a hasher on an explicit backend.
    #[must_use]
    pub const fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            state: HASH_INIT_STATE,
            pending: [0u8; BLOCK_SIZE],
            pending_len: 0,
            total: 0,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    ///
    /// Whole blocks are absorbed straight from `data`; only the tail that does
    /// not fill a block is copied.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total += data.len();

        if self.pending_len > 0 {
            let take = (BLOCK_SIZE - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];
            if self.pending_len < BLOCK_SIZE {
                return;
            }
            self.backend
                .absorb(&mut self.state, core::slice::from_ref(&self.pending));
            self.pending_len = 0;
        }

        let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
        self.backend.absorb(&mut self.state, blocks);
        self.pending[..tail.len()].copy_from_slice(tail);
        self.pending_len = tail.len();
    }

    /// Reset to the freshly constructed state, keeping the backend.
    pub const fn reset(&mut self) {
        *self = Self::with_backend(self.backend);
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Total number of bytes passed to [`Hasher::update`] so far.
    #[must_use]
    pub const fn absorbed(&self) -> usize {
        self.total
    }

    /// Compute the digest of everything absorbed so far.
    ///
    /// The hasher is left unchanged and may keep absorbing.
    ///
    /// # Errors
    /// Returns [`LengthError::Unaligned`] if the total absorbed length is not a
    /// multiple of 64.
    pub fn finalize(&self) -> Result<Digest, LengthError> {
        if self.pending_len != 0 {
            return Err(LengthError::Unaligned { len: self.total });
        }
        Ok(self.backend.finalize(&self.state))
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}
