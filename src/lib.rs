pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod controller;
pub mod input;
pub mod input_adapter;
pub mod renderer;
pub mod transform;

pub use camera::CameraState;
pub use clock::Clock;
pub use config::ControllerConfig;
pub use controller::{ControlMode, FlyController, FrameOutput};
pub use input::{Button, InputSource};
pub use input_adapter::WinitInput;
pub use transform::ModelTransform;
