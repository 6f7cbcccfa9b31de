use smallvec::SmallVec;

/// Client-chosen peer identifier.
///
/// Conventionally 20 bytes, but any non-empty byte string is accepted, so the
/// bytes live inline up to 20 and spill to the heap beyond that.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct PeerId(pub SmallVec<[u8; 20]>);
