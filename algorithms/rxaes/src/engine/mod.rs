//! Execution Engine
//!
//! Backend dispatch and the generic round sweeps.

use crate::kernels::constants::{lanes_to_bytes, HASH_INIT};
use crate::types::State;

pub mod dispatcher;
pub(crate) mod sweep;

pub use dispatcher::get_active_backend_name;

/// Serialized initial hash state.
pub(crate) const HASH_INIT_STATE: State = lanes_to_bytes(&HASH_INIT);
