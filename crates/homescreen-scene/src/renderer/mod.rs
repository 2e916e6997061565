pub mod instance;
pub mod traits;

pub use instance::{DrawInstance, DrawList};
pub use traits::{Canvas, ClientRect, DrawCall, RecordingCanvas};
