//! Shared fixtures for unit tests across the crate.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{EARTH_RADIUS_METRES, Poi, PoiCategory, PoiDraft, PoiId};

/// Origin used by the proximity scenarios (central Jakarta).
pub(crate) const ORIGIN: (f64, f64) = (-6.2088, 106.8456);

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Clock frozen at [`fixture_timestamp`].
pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn draft(name: &str, category: PoiCategory, latitude: f64, longitude: f64) -> PoiDraft {
    PoiDraft {
        name: name.to_owned(),
        description: None,
        category,
        latitude,
        longitude,
        address: Some("Jakarta, Indonesia".to_owned()),
        phone: None,
        website: None,
        rating: None,
        image_url: None,
        is_active: true,
    }
}

pub(crate) fn poi(id: i64, category: PoiCategory, latitude: f64, longitude: f64) -> Poi {
    let id = PoiId::new(id).expect("fixture id");
    Poi::new(
        id,
        draft(&format!("POI {id}"), category, latitude, longitude),
        fixture_timestamp(),
    )
    .expect("fixture draft is valid")
}

/// POI placed due north of [`ORIGIN`] at `metres` great-circle distance.
///
/// Along a meridian the haversine distance equals `R * dphi`, so the offset
/// is exact up to floating rounding.
pub(crate) fn poi_north_of_origin(id: i64, category: PoiCategory, metres: f64) -> Poi {
    let (latitude, longitude) = ORIGIN;
    let offset_degrees = (metres / EARTH_RADIUS_METRES).to_degrees();
    poi(id, category, latitude + offset_degrees, longitude)
}

pub(crate) fn inactive(poi: &Poi) -> Poi {
    poi.deactivated(fixture_timestamp())
}
