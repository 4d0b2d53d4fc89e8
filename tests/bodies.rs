use nominal_astro::bodies::{BodyCatalog, BodyConstants, BodyError, get_mu, get_property};

#[test]
fn mu_lookup_is_case_insensitive() {
    assert_eq!(get_mu("earth").unwrap(), 3.986_004_414e14);
    assert_eq!(get_mu("Earth").unwrap(), get_mu("EARTH").unwrap());
    let mars = get_mu("mars").unwrap();
    assert!((mars / 4.282_831_4e13 - 1.0).abs() < 1e-12, "got {mars}");
    assert_eq!(get_mu("moon").unwrap(), 4.904_869_5e12);
}

#[test]
fn unknown_body_is_an_error() {
    assert_eq!(
        get_mu("Vulcan"),
        Err(BodyError::UnknownBody {
            name: "Vulcan".to_string()
        })
    );
    assert!(matches!(
        get_property("Vulcan", "MU"),
        Err(BodyError::UnknownBody { .. })
    ));
}

#[test]
fn properties_resolve_per_body() {
    assert_eq!(get_property("earth", "req").unwrap(), 6_378_136.6);
    assert_eq!(get_property("EARTH", "J2").unwrap(), 1_082.616e-6);
    assert_eq!(get_property("earth", "grav").unwrap(), 9.80665);
    assert!((get_property("earth", "FLATTENING").unwrap() - 1.0 / 298.257_223_563).abs() < 1e-18);
    assert_eq!(get_property("moon", "ORBIT_E").unwrap(), 0.0549);

    // Earth day is a little under 24 hours
    let omega = get_property("earth", "OMEGA").unwrap();
    assert!((omega - 7.292e-5).abs() < 1e-8, "got {omega}");
    assert!(get_property("venus", "OMEGA").unwrap() < 0.0);
}

#[test]
fn missing_property_names_body_and_property() {
    let err = get_property("moon", "flattening").unwrap_err();
    assert_eq!(
        err,
        BodyError::UnknownProperty {
            body: "MOON".to_string(),
            property: "FLATTENING".to_string()
        }
    );
    assert!(get_property("earth", "COLOUR").is_err());
}

#[test]
fn builtin_catalog_lists_solar_system() {
    let catalog = BodyCatalog::builtin();
    assert_eq!(catalog.len(), 11);
    let names: Vec<&str> = catalog.names().collect();
    assert!(names.contains(&"SUN"));
    assert!(names.contains(&"PLUTO"));
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]), "names are ordered");
}

#[test]
fn extended_catalog_leaves_builtin_untouched() {
    let mut catalog = BodyCatalog::builtin().clone();
    let previous = catalog.insert(BodyConstants::new("ceres", 6.263e10));
    assert!(previous.is_none());
    assert_eq!(catalog.mu("Ceres").unwrap(), 6.263e10);
    assert_eq!(catalog.len(), 12);

    assert!(get_mu("ceres").is_err());
    assert_eq!(BodyCatalog::builtin().len(), 11);
}
