pub mod pseudo;
pub mod source;

pub use pseudo::PseudoSensor;
pub use source::SensorSource;
