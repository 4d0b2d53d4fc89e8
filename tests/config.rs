use std::fs;

use nominal_astro::bodies::BodyConstants;
use nominal_astro::config::{
    BodyConfig, ConfigError, StrategyKind, load_bodies, load_catalog, load_constellations,
};
use nominal_astro::constellation::{ConfigurationError, ConstellationParams, LayoutStrategy};

const MANIFESTS_YAML: &str = "\
- name: shell-a
  body: earth
  strategy: walker_delta
  satellites: 6
  planes: 3
  spacing: 1.0
  semi_major_axis_km: 6921.0
  inclination_deg: 53.0
- name: ring
  strategy: coplanar
  satellites: 4
  semi_major_axis_km: 7000.0
  inclination_deg: 0.0
  true_anomaly_offset_deg: 45.0
";

#[test]
fn yaml_manifests_load_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("constellations.yaml");
    fs::write(&path, MANIFESTS_YAML).unwrap();

    let manifests = load_constellations(&path).expect("load yaml");
    assert_eq!(manifests.len(), 2);
    assert_eq!(manifests[0].name, "shell-a");
    assert_eq!(manifests[0].strategy, StrategyKind::WalkerDelta);
    assert_eq!(manifests[1].body, "EARTH", "body defaults to Earth");

    let params = ConstellationParams::try_from(&manifests[0]).expect("params");
    assert_eq!(params.satellites(), 6);
    assert_eq!(params.reference().semi_major_axis_m, 6_921e3);
    assert!((params.reference().inclination_rad - 53.0_f64.to_radians()).abs() < 1e-15);

    match manifests[0].layout().expect("layout") {
        LayoutStrategy::WalkerDelta(walker) => {
            assert_eq!(walker.planes(), 3);
            assert_eq!(walker.relative_spacing(), 1.0);
        }
        other => panic!("unexpected layout {other:?}"),
    }

    let ring = ConstellationParams::try_from(&manifests[1]).unwrap();
    assert_eq!(ring.reference().eccentricity, 0.0);
    assert!((ring.reference().true_anomaly_offset_rad - 45.0_f64.to_radians()).abs() < 1e-15);
    assert_eq!(manifests[1].layout().unwrap(), LayoutStrategy::Coplanar);
}

#[test]
fn toml_file_and_directory_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("b_polar.toml"),
        "name = \"polar\"\nstrategy = \"coplanar_circular\"\nsatellites = 3\nsemi_major_axis_km = 7200.0\ninclination_deg = 90.0\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("a_equatorial.toml"),
        "name = \"equatorial\"\nbody = \"mars\"\nstrategy = \"coplanar\"\nsatellites = 2\nsemi_major_axis_km = 9000.0\ninclination_deg = 0.0\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let single = load_constellations(dir.path().join("b_polar.toml")).expect("single toml");
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].strategy, StrategyKind::CoplanarCircular);

    let all = load_constellations(dir.path()).expect("toml directory");
    let names: Vec<&str> = all.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["equatorial", "polar"]);
    assert_eq!(all[0].body, "mars");
}

#[test]
fn invalid_manifests_are_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    fs::write(
        &path,
        "- name: empty\n  strategy: walker_delta\n  satellites: 0\n  planes: 0\n  semi_major_axis_km: 7000.0\n  inclination_deg: 0.0\n",
    )
    .unwrap();
    let manifests = load_constellations(&path).unwrap();

    let err = ConstellationParams::try_from(&manifests[0]).unwrap_err();
    assert!(
        matches!(
            err,
            ConfigError::Invalid {
                ref name,
                source: ConfigurationError::NoSatellites
            } if name == "empty"
        ),
        "unexpected error {err:?}"
    );
    assert!(matches!(
        manifests[0].layout(),
        Err(ConfigError::Invalid {
            source: ConfigurationError::NoPlanes,
            ..
        })
    ));

    let unknown = dir.path().join("unknown.yaml");
    fs::write(
        &unknown,
        "- name: x\n  strategy: flower\n  satellites: 1\n  semi_major_axis_km: 7000.0\n  inclination_deg: 0.0\n",
    )
    .unwrap();
    assert!(matches!(load_constellations(&unknown), Err(ConfigError::Parse(_))));

    assert!(matches!(
        load_constellations(dir.path().join("missing.yaml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn custom_bodies_extend_builtin_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bodies.yaml");
    fs::write(
        &path,
        "- name: ceres\n  mu_m3_s2: 6.263e10\n  equatorial_radius_m: 482000.0\n  flattening: 0.075\n- name: vesta\n  mu_m3_s2: 1.728e10\n",
    )
    .unwrap();

    let bodies = load_bodies(&path).expect("bodies");
    assert_eq!(bodies.len(), 2);

    let catalog = load_catalog(&path).expect("catalog");
    assert_eq!(catalog.mu("CERES").unwrap(), 6.263e10);
    assert_eq!(catalog.mu("earth").unwrap(), 3.986_004_414e14);
    assert_eq!(catalog.len(), 13);
    let polar = catalog.property("ceres", "RP").unwrap();
    assert!((polar - 482_000.0 * 0.925).abs() < 1e-6, "got {polar}");

    let bad = dir.path().join("bad.yaml");
    fs::write(&bad, "- name: nothing\n  mu_m3_s2: -1.0\n").unwrap();
    assert!(matches!(
        load_bodies(&bad),
        Err(ConfigError::InvalidBody { ref name, .. }) if name == "nothing"
    ));
}

#[test]
fn body_config_converts_to_constants() {
    let config = BodyConfig {
        name: "Eris".to_string(),
        mu_m3_s2: 1.108e12,
        equatorial_radius_m: None,
        flattening: None,
        j2: Some(1e-3),
    };
    let body = BodyConstants::from(config);
    assert_eq!(body.name, "ERIS");
    assert_eq!(body.property("J2"), Some(1e-3));
    assert_eq!(body.property("REQ"), None);
}
