//! Unit tests for bs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BikeId, PersonId, SiteId};

    #[test]
    fn index_roundtrip() {
        let id = SiteId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SiteId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(BikeId(0) < BikeId(1));
        assert!(SiteId(100) > SiteId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(BikeId::INVALID.0, u32::MAX);
        assert_eq!(SiteId::INVALID.0, u32::MAX);
        assert_eq!(PersonId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
    }
}

#[cfg(test)]
mod bike {
    use crate::{Bike, BikeId, BikeType};

    #[test]
    fn type_range_check() {
        assert!(BikeType(0).in_range(3));
        assert!(BikeType(2).in_range(3));
        assert!(!BikeType(3).in_range(3));
    }

    #[test]
    fn bike_is_value() {
        let a = Bike::new(BikeId(1), BikeType(0));
        let b = a; // Copy
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "bike 1 (type 0)");
    }
}

#[cfg(test)]
mod rng {
    use crate::{PersonId, PersonRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PersonRng::new(12345, PersonId(0));
        let mut r2 = PersonRng::new(12345, PersonId(0));
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_people_differ() {
        let mut r0 = PersonRng::new(1, PersonId(0));
        let mut r1 = PersonRng::new(1, PersonId(1));
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "seeds for adjacent people should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = PersonRng::new(0, PersonId(0));
        for _ in 0..1000 {
            let v: usize = rng.gen_range(0..5);
            assert!(v < 5);
        }
    }

    #[test]
    fn child_rngs_diverge() {
        let mut root = SimRng::new(7);
        let mut a = root.child(1);
        let mut b = root.child(2);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y);
    }
}

#[cfg(test)]
mod timing {
    use crate::{PersonId, PersonRng, TravelTimes};

    #[test]
    fn ride_and_walk_respect_bounds() {
        let times = TravelTimes {
            travel_min_ms: 10,
            travel_max_ms: 20,
            ride_extra_ms: 100,
            walk_extra_ms: 200,
        };
        let mut rng = PersonRng::new(0, PersonId(0));
        for _ in 0..100 {
            let ride = times.ride(rng.inner()).as_millis() as u64;
            assert!((110..=120).contains(&ride), "ride {ride} out of bounds");
            let walk = times.walk(rng.inner()).as_millis() as u64;
            assert!((210..=220).contains(&walk), "walk {walk} out of bounds");
        }
    }

    #[test]
    fn instant_is_fast() {
        let times = TravelTimes::instant();
        let mut rng = PersonRng::new(0, PersonId(0));
        assert!(times.walk(rng.inner()).as_millis() <= 1);
    }

    #[test]
    fn swapped_bounds_do_not_panic() {
        let times = TravelTimes {
            travel_min_ms: 30,
            travel_max_ms: 10,
            ride_extra_ms: 0,
            walk_extra_ms: 0,
        };
        let mut rng = PersonRng::new(0, PersonId(0));
        let d = times.van_trip(rng.inner()).as_millis() as u64;
        assert!((10..=30).contains(&d));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig, SiteId};

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn depot_is_last_index() {
        let cfg = SimConfig { sites: 4, ..SimConfig::default() };
        assert_eq!(cfg.depot(), SiteId(4));
        assert_eq!(cfg.total_sites(), 5);
    }

    #[test]
    fn site_target_saturates() {
        let mut cfg = SimConfig::default();
        cfg.slots_per_site = 5;
        cfg.van.band_margin = 2;
        assert_eq!(cfg.site_target(), 3);
        cfg.van.band_margin = 10;
        assert_eq!(cfg.site_target(), 0);
    }

    #[test]
    fn rejects_too_few_sites() {
        let cfg = SimConfig { sites: 1, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_zero_capacity() {
        let cfg = SimConfig { slots_per_site: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_types() {
        let cfg = SimConfig { bike_types: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_overfull_depot_seed() {
        let cfg = SimConfig {
            depot_slots: 5,
            initial_bikes: 6,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
