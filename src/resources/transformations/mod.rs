mod frames;

pub use frames::ScreenTransform;
