pub mod append_point;
pub mod extract_contacts;
pub mod fit_parabola;
pub mod insert_loop;
pub mod move_point;
pub mod move_selection;
pub mod smooth_path;
pub mod trace_ring;

pub use append_point::AppendPoint;
pub use extract_contacts::{ExtractContacts, SurfaceSample};
pub use fit_parabola::FitParabola;
pub use insert_loop::InsertLoop;
pub use move_point::MovePoint;
pub use move_selection::MoveSelection;
pub use smooth_path::SmoothPath;
pub use trace_ring::TraceRingSegment;
