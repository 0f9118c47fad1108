//! Boundary topology of a lattice.

use nfwave_core::ConfigError;
use std::fmt;
use std::str::FromStr;

/// How the edges of a lattice connect.
///
/// Only [`Topology::Torus`] is implemented. `Sphere` is accepted by the
/// parser because configurations name it, but any stencil built with it
/// fails with [`ConfigError::UnsupportedTopology`].
///
/// # Examples
///
/// ```
/// use nfwave_space::Topology;
///
/// let t: Topology = "Torus".parse().unwrap();
/// assert_eq!(t, Topology::Torus);
/// assert!(t.is_supported());
/// assert!(!"Sphere".parse::<Topology>().unwrap().is_supported());
/// assert!("Klein".parse::<Topology>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Periodic in both axes: each edge wraps to the opposite edge.
    #[default]
    Torus,
    /// Named but unimplemented.
    Sphere,
}

impl Topology {
    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Torus => "Torus",
            Self::Sphere => "Sphere",
        }
    }

    /// Whether a stencil can be built for this topology.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Torus)
    }

    /// `Ok(self)` if supported, otherwise the configuration error to report.
    pub fn require_supported(self) -> Result<Self, ConfigError> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(ConfigError::UnsupportedTopology {
                topology: self.name().into(),
            })
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topology {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Torus" => Ok(Self::Torus),
            "Sphere" => Ok(Self::Sphere),
            other => Err(ConfigError::UnsupportedTopology {
                topology: other.into(),
            }),
        }
    }
}
