//! Piecewise-linear mapping from scroll progress to a style value.

use std::cmp::Ordering;

use crate::models::MotionError;

/// Maps an input range onto an output range. Inputs before the first stop
/// or after the last stop clamp to the first/last output.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeMap {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl RangeMap {
    pub fn new(input: &[f64], output: &[f64]) -> Result<Self, MotionError> {
        if input.len() != output.len() {
            return Err(MotionError::StopCountMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(MotionError::TooFewStops(input.len()));
        }
        let increasing = |w: &[f64]| w[1].partial_cmp(&w[0]) == Some(Ordering::Greater);
        if let Some(i) = input.windows(2).position(|w| !increasing(w)) {
            return Err(MotionError::NonIncreasingInput(i + 1));
        }
        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }

    /// Two-stop map between `(x0, x1)` and `(y0, y1)`. Stops given in
    /// descending order are swapped; equal input stops make a hard step.
    pub fn linear(from: (f64, f64), to: (f64, f64)) -> Self {
        let (input, output) = if from.0 <= from.1 {
            (vec![from.0, from.1], vec![to.0, to.1])
        } else {
            (vec![from.1, from.0], vec![to.1, to.0])
        };
        Self { input, output }
    }

    pub fn map(&self, value: f64) -> f64 {
        let last = self.input.len() - 1;
        if value.is_nan() || value <= self.input[0] {
            return self.output[0];
        }
        if value >= self.input[last] {
            return self.output[last];
        }

        // First stop strictly greater than value; value sits in segment [seg - 1, seg]
        let seg = self.input.partition_point(|&x| x <= value);
        let (x0, x1) = (self.input[seg - 1], self.input[seg]);
        let (y0, y1) = (self.output[seg - 1], self.output[seg]);
        let t = (value - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}
