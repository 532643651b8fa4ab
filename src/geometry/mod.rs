mod orientation;

pub use orientation::FaultOrientation;
