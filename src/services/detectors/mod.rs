pub mod fallback_detector;
pub mod local_heuristic_detector;
pub mod remote_detector;
