use log::{debug, trace, warn};
use num_traits::Float;
use std::fmt::Debug;

use crate::error::{Error, Result};

/// Tolerance used by [`find_tail`] when none is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Final bracket around the transition point of a step function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailBracket<T>
where
    T: Float + Debug,
{
    /// Largest probe known to evaluate to `false` (or the lower bound `l`)
    pub lower: T,
    /// Smallest probe known to evaluate to `true`
    pub upper: T,
    /// Number of times the predicate was evaluated
    pub evaluations: usize,
    /// Whether the bracket width reached the requested tolerance
    pub converged: bool,
}

impl<T> TailBracket<T>
where
    T: Float + Debug,
{
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    pub fn contains(&self, x: T) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Approximates the transition point of a monotone step function using the
/// default tolerance of `1e-6`.
///
/// See [`bracket_tail`] for the preconditions and the search procedure.
///
/// # Examples
///
/// ```
/// use threshold_select::find_tail;
///
/// let x0 = find_tail(|x: f64| x >= 5.3, 1.0).unwrap();
/// assert!((x0 - 5.3).abs() <= 1e-6);
/// ```
pub fn find_tail<T, F>(f: F, l: T) -> Result<T>
where
    T: Float + Debug,
    F: FnMut(T) -> bool,
{
    let delta = T::from(DEFAULT_TOLERANCE)
        .ok_or_else(|| Error::invalid_input("default tolerance is not representable"))?;
    find_tail_with_tolerance(f, l, delta)
}

/// Approximates the transition point of a monotone step function to within
/// `delta`.
///
/// Returns the upper end of the final bracket, i.e. a point where `f` is
/// known to be `true`.
pub fn find_tail_with_tolerance<T, F>(f: F, l: T, delta: T) -> Result<T>
where
    T: Float + Debug,
    F: FnMut(T) -> bool,
{
    bracket_tail(f, l, delta).map(|bracket| bracket.upper)
}

/// Brackets the transition point `x₀` of a monotone step function.
///
/// The predicate `f` must be `false` for every `x < x₀` and `true` for every
/// `x > x₀`, for some `x₀ >= l`. Its value at `x₀` itself does not matter.
///
/// The search first doubles an upper probe starting at `2 * l` until `f`
/// turns `true`, then bisects the interval between the last two probes
/// until its width is at most `delta`.
///
/// # Arguments
///
/// * `f` - The step function; called once per probe, panics propagate
/// * `l` - A finite, positive lower bound for `x₀`
/// * `delta` - A positive tolerance for the bracket width
///
/// # Returns
///
/// * `Ok(bracket)` - `bracket.upper` is within `delta` of `x₀` when
///   `bracket.converged` is set. If the floating-point type cannot resolve
///   an interval that narrow, the search stops at two adjacent values and
///   `converged` is `false`.
/// * `Err(Error::InvalidInput)` - If `l` or `delta` is not positive
/// * `Err(Error::NoTransition)` - If `f` is still `false` once the upper
///   probe overflows
///
/// Behaviour is unspecified when `f` is not monotone or `x₀ < l`.
///
/// # Examples
///
/// ```
/// use threshold_select::bracket_tail;
///
/// let bracket = bracket_tail(|x: f64| x > 1000.0, 1.0, 1e-3).unwrap();
/// assert!(bracket.converged);
/// assert!(bracket.contains(1000.0));
/// assert!(bracket.width() <= 1e-3);
/// ```
///
/// # Complexity
/// * Evaluations: O(log(x₀ / l) + log(x₀ / delta))
/// * Space: O(1)
pub fn bracket_tail<T, F>(mut f: F, l: T, delta: T) -> Result<TailBracket<T>>
where
    T: Float + Debug,
    F: FnMut(T) -> bool,
{
    if !l.is_finite() || l <= T::zero() {
        return Err(Error::invalid_input(format!(
            "lower bound must be finite and positive, got {:?}",
            l
        )));
    }
    if delta.is_nan() || delta <= T::zero() {
        return Err(Error::invalid_input(format!(
            "tolerance must be positive, got {:?}",
            delta
        )));
    }

    let two = T::one() + T::one();
    let mut evaluations = 0;

    // Exponential expansion
    let mut x_high = l * two;
    if !x_high.is_finite() {
        return Err(no_transition(l));
    }
    loop {
        evaluations += 1;
        if f(x_high) {
            break;
        }
        let next = x_high * two;
        if !next.is_finite() {
            return Err(no_transition(x_high));
        }
        x_high = next;
    }
    let mut x_low = x_high / two;
    debug!(
        "transition bracketed in [{:?}, {:?}] after {} evaluations",
        x_low, x_high, evaluations
    );

    // Bisection
    let mut converged = true;
    while x_high - x_low > delta {
        let x_mid = x_low + (x_high - x_low) / two;
        if x_mid <= x_low || x_mid >= x_high {
            warn!(
                "tolerance {:?} is below the resolution at {:?}; stopping at width {:?}",
                delta,
                x_high,
                x_high - x_low
            );
            converged = false;
            break;
        }
        evaluations += 1;
        if f(x_mid) {
            x_high = x_mid;
        } else {
            x_low = x_mid;
        }
        trace!("bisection narrowed to [{:?}, {:?}]", x_low, x_high);
    }

    debug!(
        "transition located at {:?} (width {:?}, {} evaluations)",
        x_high,
        x_high - x_low,
        evaluations
    );

    Ok(TailBracket {
        lower: x_low,
        upper: x_high,
        evaluations,
        converged,
    })
}

fn no_transition<T: Float>(bound: T) -> Error {
    Error::NoTransition {
        bound: bound.to_f64().unwrap_or(f64::MAX),
    }
}
