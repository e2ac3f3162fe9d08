//! Contract traits for anomaly detection.

mod detector;

pub use detector::AnomalyDetector;
