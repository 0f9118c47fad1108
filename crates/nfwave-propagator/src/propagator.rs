//! The [`Propagator`] and [`Restartable`] traits.
//!
//! A propagator turns the output of a driving population into a field
//! `phi` over the lattice. It is configured once from named parameters,
//! then stepped once per time step by the driver.

use nfwave_core::{ConfigError, Params, Population, PreconditionError};

/// A field propagator driven by a [`Population`].
///
/// # Contract
///
/// - `configure()` is called exactly once, before the first `step()`. It
///   validates every parameter and either leaves the propagator ready to
///   step or returns an error with no partial state.
/// - `step()` before a successful `configure()` fails with
///   [`PreconditionError::NotConfigured`].
/// - `step()` either completes the whole lattice update and history
///   rotation or fails before mutating anything.
///
/// # Object safety
///
/// Drivers hold heterogeneous propagators as `Vec<Box<dyn Propagator>>`.
///
/// # Examples
///
/// ```
/// use nfwave_core::{ConfigError, Params, Population, PreconditionError};
/// use nfwave_propagator::Propagator;
///
/// /// Holds phi at a fixed value.
/// struct Clamp {
///     phi: Vec<f64>,
/// }
///
/// impl Propagator for Clamp {
///     fn name(&self) -> &str { "clamp" }
///
///     fn configure(
///         &mut self,
///         params: &Params,
///         _population: &mut dyn Population,
///     ) -> Result<(), ConfigError> {
///         let value: f64 = params.required("value")?;
///         self.phi.fill(value);
///         Ok(())
///     }
///
///     fn step(&mut self, _population: &dyn Population) -> Result<(), PreconditionError> {
///         Ok(())
///     }
///
///     fn phi(&self) -> &[f64] { &self.phi }
/// }
///
/// let clamp = Clamp { phi: vec![0.0; 4] };
/// assert_eq!(clamp.name(), "clamp");
/// assert!(clamp.max_dt().is_none());
/// ```
pub trait Propagator: Send {
    /// Human-readable name for error reporting and logs.
    fn name(&self) -> &str;

    /// Read parameters, size history, and seed the initial state.
    fn configure(
        &mut self,
        params: &Params,
        population: &mut dyn Population,
    ) -> Result<(), ConfigError>;

    /// Advance `phi` by one time step.
    fn step(&mut self, population: &dyn Population) -> Result<(), PreconditionError>;

    /// Current field values, one per node.
    ///
    /// Empty until `configure()` succeeds.
    fn phi(&self) -> &[f64];

    /// Largest stable time step for the configured parameters.
    ///
    /// `None` imposes no constraint.
    fn max_dt(&self) -> Option<f64> {
        None
    }
}

/// Checkpoint/restart seam.
///
/// `dump()` externalises everything needed to resume stepping; `restart()`
/// reconstitutes it. The serialised format is the caller's concern.
pub trait Restartable {
    /// Snapshot type.
    type State;

    /// Capture the current state.
    fn dump(&self) -> Result<Self::State, PreconditionError>;

    /// Replace the current state with `state`.
    fn restart(&mut self, state: &Self::State) -> Result<(), PreconditionError>;
}
