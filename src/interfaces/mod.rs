// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod codec;

pub use codec::RationalCodec;
