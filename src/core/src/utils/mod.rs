use log::debug;
use rand::RngExt;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, elapsed) = TimeEstimation::estimate(action);

        debug!("{}, {} ms", message, elapsed);

        result
    }
}

pub struct IntegerUtils;

impl IntegerUtils {
    /// Uniform draw in [min, max], both ends inclusive
    pub fn random(min: i32, max: i32) -> i32 {
        rand::rng().random_range(min..=max)
    }
}
