//! Planetary constants registry.
//!
//! Bodies are keyed by their upper-cased name, so lookups are case-insensitive. The
//! built-in table is assembled once per process and never mutated afterwards; custom
//! bodies go into a cloned [`BodyCatalog`] instead.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use nominal_core::constants::{AU, D2R, TWO_PI};
use thiserror::Error;

/// Errors surfaced while resolving body constants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    #[error("no body named `{name}` in the constants table")]
    UnknownBody { name: String },
    #[error("body `{body}` has no property `{property}`")]
    UnknownProperty { body: String, property: String },
}

/// Physical constants for a single celestial body (SI units).
#[derive(Debug, Clone, PartialEq)]
pub struct BodyConstants {
    pub name: String,
    pub mu_m3_s2: f64,
    pub equatorial_radius_m: Option<f64>,
    pub polar_radius_m: Option<f64>,
    pub mass_kg: Option<f64>,
    pub flattening: Option<f64>,
    /// Zonal harmonics J2 through J6, where known.
    pub zonal: [Option<f64>; 5],
    pub rotation_rate_rad_s: Option<f64>,
    pub density_kg_m3: Option<f64>,
    pub albedo_avg: Option<f64>,
    pub orbit_sma_m: Option<f64>,
    pub orbit_inclination_rad: Option<f64>,
    pub orbit_eccentricity: Option<f64>,
    pub solar_flux_w_m2: Option<f64>,
    pub surface_gravity_m_s2: Option<f64>,
}

impl BodyConstants {
    /// A body known only by its gravitational parameter.
    pub fn new(name: &str, mu_m3_s2: f64) -> Self {
        Self {
            name: name.trim().to_ascii_uppercase(),
            mu_m3_s2,
            equatorial_radius_m: None,
            polar_radius_m: None,
            mass_kg: None,
            flattening: None,
            zonal: [None; 5],
            rotation_rate_rad_s: None,
            density_kg_m3: None,
            albedo_avg: None,
            orbit_sma_m: None,
            orbit_inclination_rad: None,
            orbit_eccentricity: None,
            solar_flux_w_m2: None,
            surface_gravity_m_s2: None,
        }
    }

    /// Look up a property by its table name (`MU`, `REQ`, `J2`, `ORBIT_SMA`, ...).
    pub fn property(&self, property: &str) -> Option<f64> {
        match property.trim().to_ascii_uppercase().as_str() {
            "MU" => Some(self.mu_m3_s2),
            "REQ" => self.equatorial_radius_m,
            "RP" => self.polar_radius_m,
            "MASS" => self.mass_kg,
            "FLATTENING" => self.flattening,
            "J2" => self.zonal[0],
            "J3" => self.zonal[1],
            "J4" => self.zonal[2],
            "J5" => self.zonal[3],
            "J6" => self.zonal[4],
            "OMEGA" => self.rotation_rate_rad_s,
            "DENSITY" => self.density_kg_m3,
            "ALBEDO_AVG" => self.albedo_avg,
            "ORBIT_SMA" => self.orbit_sma_m,
            "ORBIT_INC" => self.orbit_inclination_rad,
            "ORBIT_E" | "ORBIT_ECC" => self.orbit_eccentricity,
            "SOLAR_FLUX" => self.solar_flux_w_m2,
            "GRAV" => self.surface_gravity_m_s2,
            _ => None,
        }
    }
}

/// Ordered, case-insensitive mapping from body name to its constants.
#[derive(Debug, Clone, Default)]
pub struct BodyCatalog {
    bodies: BTreeMap<String, BodyConstants>,
}

impl BodyCatalog {
    /// The built-in solar-system table, initialised on first use.
    pub fn builtin() -> &'static BodyCatalog {
        static BUILTIN: OnceLock<BodyCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| BodyCatalog::from_bodies(builtin_bodies()))
    }

    pub fn from_bodies<I: IntoIterator<Item = BodyConstants>>(bodies: I) -> Self {
        let mut catalog = Self::default();
        for body in bodies {
            catalog.insert(body);
        }
        catalog
    }

    /// Insert or replace a body, returning the previous entry with the same name.
    pub fn insert(&mut self, mut body: BodyConstants) -> Option<BodyConstants> {
        body.name = body.name.trim().to_ascii_uppercase();
        self.bodies.insert(body.name.clone(), body)
    }

    pub fn get(&self, name: &str) -> Result<&BodyConstants, BodyError> {
        self.bodies
            .get(&name.trim().to_ascii_uppercase())
            .ok_or_else(|| BodyError::UnknownBody {
                name: name.to_string(),
            })
    }

    /// Gravitational parameter (m³/s²) of the named body.
    pub fn mu(&self, name: &str) -> Result<f64, BodyError> {
        self.get(name).map(|body| body.mu_m3_s2)
    }

    pub fn property(&self, name: &str, property: &str) -> Result<f64, BodyError> {
        let body = self.get(name)?;
        body.property(property)
            .ok_or_else(|| BodyError::UnknownProperty {
                body: body.name.clone(),
                property: property.trim().to_ascii_uppercase(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Gravitational parameter (m³/s²) of a built-in body, case-insensitive.
pub fn get_mu(name: &str) -> Result<f64, BodyError> {
    BodyCatalog::builtin().mu(name)
}

/// Any tabulated property of a built-in body, case-insensitive on both arguments.
pub fn get_property(name: &str, property: &str) -> Result<f64, BodyError> {
    BodyCatalog::builtin().property(name, property)
}

/// Rotation rate from a sidereal day length in hours (negative for retrograde spin).
fn spin(hours: f64) -> Option<f64> {
    Some(TWO_PI / hours / 3_600.0)
}

fn builtin_bodies() -> Vec<BodyConstants> {
    vec![
        BodyConstants {
            equatorial_radius_m: Some(695_000_000.0),
            polar_radius_m: Some(6.955_08e8),
            mass_kg: Some(1.989e30),
            zonal: [Some(0.0), None, None, None, None],
            density_kg_m3: Some(1_410.0),
            albedo_avg: Some(0.0),
            ..BodyConstants::new("SUN", 132_712_440_023.310 * 1e9)
        },
        BodyConstants {
            equatorial_radius_m: Some(2_439_700.0),
            polar_radius_m: Some(2.4397e6),
            mass_kg: Some(0.330e24),
            zonal: [Some(60.0e-6), None, None, None, None],
            rotation_rate_rad_s: spin(1_407.6),
            density_kg_m3: Some(5_427.0),
            albedo_avg: Some(0.119),
            orbit_sma_m: Some(0.387_098_93 * AU),
            orbit_inclination_rad: Some(7.004_87 * D2R),
            orbit_eccentricity: Some(0.205_630_69),
            ..BodyConstants::new("MERCURY", 22_032.080 * 1e9)
        },
        BodyConstants {
            equatorial_radius_m: Some(6_051_800.0),
            polar_radius_m: Some(6.0518e6),
            mass_kg: Some(4.87e24),
            zonal: [Some(4.458e-6), None, None, None, None],
            rotation_rate_rad_s: spin(-5_832.6),
            density_kg_m3: Some(5_243.0),
            albedo_avg: Some(0.75),
            orbit_sma_m: Some(0.723_331_99 * AU),
            orbit_inclination_rad: Some(3.394_71 * D2R),
            orbit_eccentricity: Some(0.006_773_23),
            ..BodyConstants::new("VENUS", 324_858.599 * 1e9)
        },
        BodyConstants {
            equatorial_radius_m: Some(6_378_136.6),
            polar_radius_m: Some(6_356_751.9),
            mass_kg: Some(5.97e24),
            flattening: Some(1.0 / 298.257_223_563),
            zonal: [
                Some(1_082.616e-6),
                Some(-2.538_81e-6),
                Some(-1.655_97e-6),
                Some(-0.15e-6),
                Some(0.57e-6),
            ],
            rotation_rate_rad_s: spin(23.9345),
            density_kg_m3: Some(5_514.0),
            albedo_avg: Some(0.29),
            orbit_sma_m: Some(1.000_000_11 * AU),
            orbit_inclination_rad: Some(0.000_05 * D2R),
            orbit_eccentricity: Some(0.016_710_22),
            solar_flux_w_m2: Some(1_372.5398),
            surface_gravity_m_s2: Some(9.80665),
            ..BodyConstants::new("EARTH", 3.986_004_414e14)
        },
        BodyConstants {
            equatorial_radius_m: Some(1_737_400.0),
            polar_radius_m: Some(1.7374e6),
            mass_kg: Some(0.073e24),
            zonal: [Some(202.7e-6), None, None, None, None],
            rotation_rate_rad_s: spin(655.728),
            density_kg_m3: Some(3_340.0),
            albedo_avg: Some(0.123),
            orbit_sma_m: Some(0.3844e9),
            orbit_eccentricity: Some(0.0549),
            ..BodyConstants::new("MOON", 4.904_869_5e12)
        },
        BodyConstants {
            equatorial_radius_m: Some(3_396_190.0),
            polar_radius_m: Some(3_376_200.0),
            mass_kg: Some(0.642e24),
            zonal: [Some(1_960.45e-6), None, None, None, None],
            rotation_rate_rad_s: spin(24.6229),
            density_kg_m3: Some(3_933.0),
            albedo_avg: Some(0.16),
            orbit_sma_m: Some(1.523_662_31 * AU),
            orbit_inclination_rad: Some(1.850_61 * D2R),
            orbit_eccentricity: Some(0.093_412_33),
            ..BodyConstants::new("MARS", 42_828.314 * 1e9)
        },
        BodyConstants {
            equatorial_radius_m: Some(71_492_000.0),
            polar_radius_m: Some(7.1492e7),
            mass_kg: Some(1_898e24),
            zonal: [Some(14_736.0e-6), None, None, None, None],
            rotation_rate_rad_s: spin(9.9250),
            density_kg_m3: Some(1_326.0),
            albedo_avg: Some(0.34),
            orbit_sma_m: Some(5.203_363_01 * AU),
            orbit_inclination_rad: Some(1.305_30 * D2R),
            orbit_eccentricity: Some(0.048_392_66),
            ..BodyConstants::new("JUPITER", 126_712_767.881 * 1e9)
        },
        BodyConstants {
            equatorial_radius_m: Some(60_268_000.0),
            polar_radius_m: Some(6.0268e7),
            mass_kg: Some(568e24),
            zonal: [Some(16_298.0e-6), None, None, None, None],
            rotation_rate_rad_s: spin(10.656),
            density_kg_m3: Some(687.0),
            albedo_avg: Some(0.34),
            orbit_sma_m: Some(9.537_070_32 * AU),
            orbit_inclination_rad: Some(2.484_46 * D2R),
            orbit_eccentricity: Some(0.054_150_60),
            ..BodyConstants::new("SATURN", 37_940_626.068 * 1e9)
        },
        BodyConstants {
            equatorial_radius_m: Some(25_559_000.0),
            polar_radius_m: Some(2.5559e7),
            mass_kg: Some(86.8e24),
            zonal: [Some(3_343.43e-6), None, None, None, None],
            rotation_rate_rad_s: spin(-17.24),
            density_kg_m3: Some(1_271.0),
            albedo_avg: Some(0.29),
            orbit_sma_m: Some(19.191_263_93 * AU),
            orbit_inclination_rad: Some(0.769_86 * D2R),
            orbit_eccentricity: Some(0.047_167_71),
            ..BodyConstants::new("URANUS", 5_794_559.128 * 1e9)
        },
        BodyConstants {
            equatorial_radius_m: Some(24_746_000.0),
            polar_radius_m: Some(2.4746e7),
            mass_kg: Some(102e24),
            zonal: [Some(3_411.0e-6), None, None, None, None],
            rotation_rate_rad_s: spin(16.11),
            density_kg_m3: Some(1_638.0),
            albedo_avg: Some(0.31),
            orbit_sma_m: Some(30.068_963_48 * AU),
            orbit_inclination_rad: Some(1.769_17 * D2R),
            orbit_eccentricity: Some(0.008_585_87),
            ..BodyConstants::new("NEPTUNE", 6_836_534.065 * 1e9)
        },
        BodyConstants {
            equatorial_radius_m: Some(1_137_000.0),
            polar_radius_m: Some(1.37e6),
            mass_kg: Some(0.0146e24),
            zonal: [Some(0.0), None, None, None, None],
            rotation_rate_rad_s: spin(-153.2928),
            density_kg_m3: Some(2_095.0),
            albedo_avg: Some(0.0),
            orbit_sma_m: Some(39.481_686_77 * AU),
            orbit_inclination_rad: Some(17.141_75 * D2R),
            orbit_eccentricity: Some(0.248_807_66),
            ..BodyConstants::new("PLUTO", 983.055 * 1e9)
        },
    ]
}
