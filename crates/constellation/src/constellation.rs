//! Ordered satellite mappings and the elements → states pass.

use std::collections::BTreeMap;
use std::collections::btree_map;

use nominal_bodies::get_mu;
use nominal_orbits::{ClassicalElements, ConversionError, StateVector, elements_to_state};
use serde_json::Value;

use crate::ConstellationError;

/// Named per-satellite values attached with [`Constellation::set_variable`].
pub type Variables = BTreeMap<String, Value>;

/// Value given to [`Constellation::set_variable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// The same value for every targeted satellite.
    Uniform(Value),
    /// One value per targeted satellite, in the order the satellites were named.
    PerSatellite(Vec<Value>),
}

impl From<Value> for Assignment {
    fn from(value: Value) -> Self {
        Assignment::Uniform(value)
    }
}

/// Satellite index → value (elements or state vectors), iterated in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Constellation<T> {
    satellites: BTreeMap<usize, T>,
    satellites_per_plane: usize,
    variables: BTreeMap<usize, Variables>,
}

impl<T> Constellation<T> {
    pub(crate) fn new(satellites: BTreeMap<usize, T>, satellites_per_plane: usize) -> Self {
        Self {
            satellites,
            satellites_per_plane: satellites_per_plane.max(1),
            variables: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.satellites.get(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.satellites.contains_key(&index)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, usize, T> {
        self.satellites.iter()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.satellites.keys().copied()
    }

    pub fn satellites_per_plane(&self) -> usize {
        self.satellites_per_plane
    }

    pub fn planes(&self) -> usize {
        self.len().div_ceil(self.satellites_per_plane)
    }

    /// Orbital plane of a satellite (`index / satellites_per_plane`).
    pub fn plane_of(&self, index: usize) -> Option<usize> {
        self.contains(index)
            .then(|| index / self.satellites_per_plane)
    }

    /// Apply a fallible conversion to every satellite, keeping indices and plane layout.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Constellation<U>, E>
    where
        F: FnMut(usize, &T) -> Result<U, E>,
    {
        let satellites = self
            .satellites
            .iter()
            .map(|(&index, value)| f(index, value).map(|converted| (index, converted)))
            .collect::<Result<BTreeMap<_, _>, E>>()?;
        Ok(Constellation {
            satellites,
            satellites_per_plane: self.satellites_per_plane,
            variables: self.variables.clone(),
        })
    }

    /// Attach a named value to the satellites in `ids`, or to every satellite when
    /// `ids` is `None`.
    ///
    /// Every index is checked before anything is written, so a failed call leaves
    /// the constellation unchanged. A [`Assignment::PerSatellite`] list must hold
    /// exactly one value per targeted satellite.
    pub fn set_variable(
        &mut self,
        ids: Option<&[usize]>,
        name: &str,
        value: impl Into<Assignment>,
    ) -> Result<(), ConstellationError> {
        let targets: Vec<usize> = match ids {
            Some(ids) => ids.to_vec(),
            None => self.indices().collect(),
        };
        if let Some(&index) = targets.iter().find(|&&index| !self.contains(index)) {
            return Err(ConstellationError::UnknownSatellite { index });
        }

        match value.into() {
            Assignment::Uniform(value) => {
                for index in targets {
                    self.assign(index, name, value.clone());
                }
            }
            Assignment::PerSatellite(values) => {
                if values.len() != targets.len() {
                    return Err(ConstellationError::VariableLength {
                        name: name.to_string(),
                        expected: targets.len(),
                        actual: values.len(),
                    });
                }
                for (index, value) in targets.into_iter().zip(values) {
                    self.assign(index, name, value);
                }
            }
        }
        Ok(())
    }

    /// Value previously attached to one satellite under `name`.
    pub fn variable(&self, index: usize, name: &str) -> Option<&Value> {
        self.variables.get(&index)?.get(name)
    }

    /// All values attached to one satellite.
    pub fn variables(&self, index: usize) -> Option<&Variables> {
        self.variables.get(&index)
    }

    fn assign(&mut self, index: usize, name: &str, value: Value) {
        self.variables
            .entry(index)
            .or_default()
            .insert(name.to_string(), value);
    }
}

impl Constellation<ClassicalElements> {
    /// True argument of latitude `ω + ν` of one satellite, in `[0, 2π)`.
    pub fn true_argument_of_latitude(&self, index: usize) -> Option<f64> {
        self.get(index)
            .map(ClassicalElements::argument_of_latitude_rad)
    }
}

impl<'a, T> IntoIterator for &'a Constellation<T> {
    type Item = (&'a usize, &'a T);
    type IntoIter = btree_map::Iter<'a, usize, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Convert every element set to an inertial state around the named body.
pub fn elements_to_states(
    constellation: &Constellation<ClassicalElements>,
    body: &str,
) -> Result<Constellation<StateVector>, ConstellationError> {
    elements_to_states_with_mu(constellation, get_mu(body)?)
}

/// Convert every element set to an inertial state with an explicit `mu`.
pub fn elements_to_states_with_mu(
    constellation: &Constellation<ClassicalElements>,
    mu_m3_s2: f64,
) -> Result<Constellation<StateVector>, ConstellationError> {
    constellation.try_map(|index, elements| {
        elements_to_state(elements, mu_m3_s2).map_err(|err| ConstellationError::Conversion {
            index,
            source: ConversionError::Domain(err),
        })
    })
}
