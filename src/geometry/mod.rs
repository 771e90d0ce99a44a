pub mod contact_ring;
pub mod frame;
pub mod plane;
pub mod reference_plane;

pub use contact_ring::ContactRing;
pub use frame::PlaneFrame;
pub use plane::Plane;
pub use reference_plane::{PlaneControlSet, ReferencePlane};
