//! Unit tests for ride-store.

#[cfg(test)]
mod helpers {
    use crate::{NewRide, NewUser, RideId, RideSummary, UserId};

    /// 2026-01-01 00:00:00 UTC.
    pub const NOW: i64 = 1_767_225_600;

    pub fn asha() -> NewUser {
        NewUser {
            auth_id: Some(UserId::new("user_2a")),
            name:    "Asha Rao".into(),
            email:   "asha@example.com".into(),
        }
    }

    pub fn ride(origin: &str, destination: &str, departure: i64) -> NewRide {
        NewRide {
            email:               "asha@example.com".into(),
            auth_id:             None,
            origin_address:      origin.into(),
            destination_address: destination.into(),
            departure_unix_secs: departure,
            price:               180.0,
            car_model:           "Swift".into(),
            seats:               3,
            phone_number:        "+91 98450 00000".into(),
        }
    }

    pub fn summary(id: i64, origin: &str, destination: &str, departure: i64) -> RideSummary {
        RideSummary {
            id:                  RideId(id),
            origin_address:      origin.into(),
            destination_address: destination.into(),
            departure_unix_secs: departure,
            price:               99.5,
            car_model:           "Nexon".into(),
            available_seats:     2,
            phone_number:        "000".into(),
            driver_name:         Some("Asha Rao".into()),
        }
    }
}

// ── Model validation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use super::helpers::{asha, ride, summary, NOW};
    use crate::{NewUser, StoreError};

    #[test]
    fn complete_ride_is_valid() {
        assert!(ride("MG Road", "Whitefield", NOW + 3600).validate().is_ok());
    }

    #[test]
    fn missing_fields_listed_in_request_order() {
        let mut r = ride("", "Whitefield", 0);
        r.seats = 0;
        r.phone_number = "  ".into();
        assert_eq!(
            r.missing_fields(),
            vec!["originAddress", "departureTime", "seats", "phone"]
        );
        match r.validate() {
            Err(StoreError::MissingFields(f)) => assert_eq!(f.len(), 4),
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn zero_price_counts_as_missing() {
        let mut r = ride("A", "B", NOW);
        r.price = 0.0;
        assert_eq!(r.missing_fields(), vec!["price"]);
    }

    #[test]
    fn user_requires_email_and_name() {
        assert!(asha().validate().is_ok());
        let blank = NewUser { auth_id: None, name: String::new(), email: String::new() };
        let err = blank.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required fields: email, name");
    }

    #[test]
    fn minutes_until_departure() {
        let s = summary(1, "A", "B", NOW + 61 * 60 + 59);
        assert_eq!(s.minutes_until(NOW), 61);
        assert_eq!(s.minutes_until(NOW + 2 * 3600), 0, "departed rides clamp to zero");
    }

    #[test]
    fn driver_names_with_placeholders() {
        let mut s = summary(1, "A", "B", NOW);
        assert_eq!(s.driver_names(), ("Asha", "Rao"));
        s.driver_name = Some("Prince".into());
        assert_eq!(s.driver_names(), ("Prince", "Driver"));
        s.driver_name = Some(String::new());
        assert_eq!(s.driver_names(), ("Unknown", "Driver"));
        s.driver_name = None;
        assert_eq!(s.driver_names(), ("Unknown", "Driver"));
    }

    #[test]
    fn price_label_two_decimals() {
        assert_eq!(summary(1, "A", "B", NOW).price_label(), "99.50");
    }
}

// ── Search predicate ──────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use super::helpers::{summary, NOW};
    use crate::{RideSearch, SqlParam};

    #[test]
    fn predicate_binds_patterns_and_time() {
        let p = RideSearch::new(" mg road ", "Whitefield", NOW).predicate();
        assert!(p.sql.contains("r.departure_time > ?3"));
        assert_eq!(p.order_by, "r.departure_time ASC");
        assert_eq!(
            p.params,
            vec![
                SqlParam::Text("%mg road%".into()),
                SqlParam::Text("%Whitefield%".into()),
                SqlParam::Integer(NOW),
            ]
        );
    }

    #[test]
    fn wildcards_in_input_are_escaped() {
        let p = RideSearch::new("100%_off\\", "", NOW).predicate();
        assert_eq!(p.params[0], SqlParam::Text("%100\\%\\_off\\\\%".into()));
        assert_eq!(p.params[1], SqlParam::Text("%%".into()));
    }

    #[test]
    fn in_memory_match_is_case_insensitive_substring() {
        let search = RideSearch::new("mg road", "WHITE", NOW);
        assert!(search.matches(&summary(1, "12 MG Road, Bengaluru", "Whitefield", NOW + 60)));
        assert!(!search.matches(&summary(2, "Indiranagar", "Whitefield", NOW + 60)));
        assert!(!search.matches(&summary(3, "MG Road", "Whitefield", NOW)), "departed");
    }

    #[test]
    fn apply_orders_by_departure() {
        let rows = vec![
            summary(1, "MG Road", "Whitefield", NOW + 900),
            summary(2, "MG Road", "Whitefield", NOW + 300),
            summary(3, "Airport", "Whitefield", NOW + 100),
            summary(4, "MG Road", "Whitefield", NOW - 100),
        ];
        let hits = RideSearch::new("mg", "white", NOW).apply(&rows);
        let ids: Vec<i64> = hits.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_rides_csv, load_rides_reader, StoreError, UserId};

    const CSV: &str = "\
email,auth_id,origin_address,destination_address,departure_unix_secs,price,car_model,seats,phone_number
asha@example.com,user_2a,MG Road,Whitefield,1767250800,180.0,Swift,3,+91 98450 00000
ravi@example.com,,Koramangala,Airport,1767254400,650,Innova,5,+91 99000 11111
";

    #[test]
    fn parses_rows() {
        let rides = load_rides_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(rides.len(), 2);
        assert_eq!(rides[0].auth_id, Some(UserId::new("user_2a")));
        assert_eq!(rides[1].auth_id, None);
        assert_eq!(rides[1].seats, 5);
        assert_eq!(rides[1].price, 650.0);
    }

    #[test]
    fn bad_number_is_parse_error() {
        let bad = CSV.replace("650", "lots");
        assert!(matches!(load_rides_reader(Cursor::new(bad)), Err(StoreError::Parse(_))));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("rides.csv");
        std::fs::write(&path, CSV).unwrap();
        assert_eq!(load_rides_csv(&path).unwrap().len(), 2);

        let missing = load_rides_csv(&dir.path().join("nope.csv"));
        assert!(matches!(missing, Err(StoreError::Io(_))));
    }
}

// ── SQLite store ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::helpers::{asha, ride, NOW};
    use crate::{NewUser, RideId, RideSearch, SqliteStore, StoreError, SyncOutcome, UserId};

    fn store_with_asha() -> SqliteStore {
        let store = SqliteStore::in_memory().unwrap();
        assert_eq!(store.sync_user(&asha()).unwrap(), SyncOutcome::Created);
        store
    }

    #[test]
    fn sync_user_is_idempotent() {
        let store = store_with_asha();
        assert_eq!(store.sync_user(&asha()).unwrap(), SyncOutcome::Unchanged);

        let renamed = NewUser { name: "Asha R".into(), ..asha() };
        assert_eq!(store.sync_user(&renamed).unwrap(), SyncOutcome::Updated);
        assert_eq!(store.user_by_email("asha@example.com").unwrap().unwrap().name, "Asha R");
    }

    #[test]
    fn sync_without_identity_keeps_stored_one() {
        let store = store_with_asha();
        let anonymous = NewUser { auth_id: None, ..asha() };
        assert_eq!(store.sync_user(&anonymous).unwrap(), SyncOutcome::Unchanged);
        let user = store.user_by_email("asha@example.com").unwrap().unwrap();
        assert_eq!(user.auth_id, Some(UserId::new("user_2a")));
    }

    #[test]
    fn identity_taken_by_other_email_conflicts() {
        let store = store_with_asha();
        let other = NewUser { email: "other@example.com".into(), ..asha() };
        assert!(matches!(store.sync_user(&other), Err(StoreError::Conflict(_))));
    }

    #[test]
    fn host_requires_known_user() {
        let store = SqliteStore::in_memory().unwrap();
        let err = store.host_ride(&ride("MG Road", "Whitefield", NOW + 60)).unwrap_err();
        assert!(matches!(err, StoreError::UnknownUser(e) if e == "asha@example.com"));
    }

    #[test]
    fn host_validates_fields() {
        let store = store_with_asha();
        let err = store.host_ride(&ride("", "Whitefield", NOW + 60)).unwrap_err();
        assert!(matches!(err, StoreError::MissingFields(f) if f == vec!["originAddress"]));
    }

    #[test]
    fn host_without_any_identity() {
        let store = SqliteStore::in_memory().unwrap();
        store.sync_user(&NewUser { auth_id: None, ..asha() }).unwrap();
        let err = store.host_ride(&ride("A", "B", NOW + 60)).unwrap_err();
        assert!(matches!(err, StoreError::NoIdentity(_)));
    }

    #[test]
    fn search_filters_and_orders() {
        let store = store_with_asha();
        let late = store.host_ride(&ride("12 MG Road", "Whitefield", NOW + 7200)).unwrap();
        let early = store.host_ride(&ride("MG Road Metro", "ITPL Whitefield", NOW + 600)).unwrap();
        store.host_ride(&ride("MG Road", "Airport", NOW + 600)).unwrap();
        store.host_ride(&ride("MG Road", "Whitefield", NOW - 600)).unwrap();

        let hits = store.search_rides(&RideSearch::new("mg road", "whitefield", NOW)).unwrap();
        let ids: Vec<_> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![early, late]);
        assert_eq!(hits[0].driver_name.as_deref(), Some("Asha Rao"));
        assert_eq!(hits[0].available_seats, 3);
    }

    #[test]
    fn search_treats_wildcards_literally() {
        let store = store_with_asha();
        store.host_ride(&ride("Gate 5", "Hall A", NOW + 60)).unwrap();
        let hits = store.search_rides(&RideSearch::new("%", "", NOW)).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn sql_and_in_memory_filters_agree() {
        let store = store_with_asha();
        for (o, d, t) in [
            ("MG Road", "Whitefield", NOW + 60),
            ("mg road east", "WHITEFIELD", NOW + 120),
            ("Jayanagar", "Whitefield", NOW + 180),
            ("MG Road", "Hebbal", NOW + 240),
        ] {
            store.host_ride(&ride(o, d, t)).unwrap();
        }
        let search = RideSearch::new("MG road", "whitefield", NOW);
        let everything = store.search_rides(&RideSearch::new("", "", 0)).unwrap();
        let in_memory: Vec<_> = search.apply(&everything).into_iter().cloned().collect();
        assert_eq!(store.search_rides(&search).unwrap(), in_memory);
    }

    #[test]
    fn file_backed_store_persists() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("rides.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.sync_user(&asha()).unwrap();
            store.host_ride(&ride("MG Road", "Whitefield", NOW + 60)).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.search_rides(&RideSearch::new("", "", NOW)).unwrap().len(), 1);
    }

    #[test]
    fn rides_survive_identity_change() {
        let store = store_with_asha();
        let id = store.host_ride(&ride("MG Road", "Whitefield", NOW + 60)).unwrap();

        let rebound = NewUser { auth_id: Some(UserId::new("user_9z")), ..asha() };
        assert_eq!(store.sync_user(&rebound).unwrap(), SyncOutcome::Updated);

        let hits = store.search_rides(&RideSearch::new("mg", "white", NOW)).unwrap();
        assert_eq!(hits.len(), 1, "hosted ride must still be listed");
        assert_eq!(hits[0].id, id);
        assert_eq!(hits[0].driver_name, None);
        assert_eq!(hits[0].driver_names(), ("Unknown", "Driver"));
    }

    #[test]
    fn ride_by_id_found_and_missing() {
        let store = store_with_asha();
        let id = store.host_ride(&ride("MG Road", "Whitefield", NOW + 60)).unwrap();

        let found = store.ride_by_id(id).unwrap().expect("hosted ride");
        assert_eq!(found.id, id);
        assert_eq!(found.origin_address, "MG Road");
        assert_eq!(found.driver_name.as_deref(), Some("Asha Rao"));

        assert_eq!(store.ride_by_id(RideId(id.0 + 1000)).unwrap(), None);
    }

    #[test]
    fn ride_by_id_includes_departed_rides() {
        let store = store_with_asha();
        let id = store.host_ride(&ride("MG Road", "Whitefield", NOW - 3600)).unwrap();
        assert!(store.ride_by_id(id).unwrap().is_some());
    }

    #[test]
    fn delete_user_by_identity() {
        let store = store_with_asha();
        let id = store.host_ride(&ride("MG Road", "Whitefield", NOW + 60)).unwrap();

        assert!(store.delete_user(&UserId::new("user_2a")).unwrap());
        assert_eq!(store.user_by_email("asha@example.com").unwrap(), None);
        assert!(!store.delete_user(&UserId::new("user_2a")).unwrap(), "already gone");

        let orphan = store.ride_by_id(id).unwrap().expect("ride kept");
        assert_eq!(orphan.driver_name, None);
    }

    #[test]
    fn delete_unknown_identity_is_noop() {
        let store = store_with_asha();
        assert!(!store.delete_user(&UserId::new("nobody")).unwrap());
        assert!(store.user_by_email("asha@example.com").unwrap().is_some());
    }
}
