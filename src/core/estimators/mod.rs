mod streaming_moments;

pub use streaming_moments::StreamingMoments;
