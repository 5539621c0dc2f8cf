//! Test helpers for writing city datasets and trip preferences to disk.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use tempfile::TempDir;
use tripwise_core::{
    Attraction, CityData, CityDistances, DistanceTable, Restaurant, TripPreferences,
};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write test file");
}

pub(super) fn write_json<T: serde::Serialize>(path: &Utf8Path, value: &T) {
    let payload = serde_json::to_vec_pretty(value).expect("serialise test fixture");
    write_utf8(path, &payload);
}

fn attraction(id: u64, name: &str, lat: f64, lng: f64) -> Attraction {
    Attraction::new(id, name, Coord { x: lng, y: lat })
}

/// Four attractions with travel tables authored in one direction only.
pub(super) fn sample_city() -> CityData {
    CityData {
        name: "Brasília, DF".to_owned(),
        center: Coord {
            x: -47.8822,
            y: -15.7942,
        },
        categories: vec!["landmark".to_owned(), "museum".to_owned(), "park".to_owned()],
        attractions: vec![
            attraction(1, "Catedral", -15.7983, -47.8755)
                .with_visit(1.0, 0.0)
                .with_benefit(9.0)
                .with_opening_hours(8, 18)
                .with_category("landmark"),
            attraction(2, "Congresso Nacional", -15.7997, -47.8641)
                .with_visit(1.5, 0.0)
                .with_benefit(8.0)
                .with_opening_hours(9, 17)
                .with_category("landmark"),
            attraction(3, "Museu Nacional", -15.7969, -47.8783)
                .with_visit(2.0, 30.0)
                .with_benefit(6.0)
                .with_opening_hours(9, 18)
                .with_category("museum"),
            attraction(4, "Parque da Cidade", -15.8003, -47.9067)
                .with_visit(2.0, 0.0)
                .with_benefit(5.0)
                .with_opening_hours(6, 20)
                .with_category("park"),
        ],
        restaurants: vec![
            Restaurant::new("Mangai", "regional").with_near([1, 3]),
            Restaurant::new("Coco Bambu", "seafood").with_near([2]),
            Restaurant::new("Far Grill", "barbecue").with_near([99]),
            Restaurant::new("Parque Café", "cafe").with_near([4]),
        ],
        distances: CityDistances {
            driving: one_way_table(&[
                (1, 2, 5.0),
                (1, 3, 2.0),
                (1, 4, 8.0),
                (3, 2, 6.0),
                (2, 4, 12.0),
                (3, 4, 7.0),
            ]),
            walking: one_way_table(&[
                (1, 2, 20.0),
                (1, 3, 5.0),
                (1, 4, 40.0),
                (3, 2, 25.0),
                (2, 4, 60.0),
                (3, 4, 35.0),
            ]),
        },
    }
}

fn one_way_table(legs: &[(u64, u64, f64)]) -> DistanceTable {
    legs.iter()
        .fold(DistanceTable::new(), |table, (from, to, minutes)| {
            table.with_leg(*from, *to, *minutes, 0.0)
        })
}

/// Two four-hour days and a spend that covers every entry price.
pub(super) fn sample_preferences() -> TripPreferences {
    TripPreferences {
        daily_hours: vec![4, 4],
        max_spend: 100,
        ..TripPreferences::default()
    }
}

/// Temporary directory holding a city dataset and trip preferences.
#[derive(Debug)]
pub(super) struct PlanFiles {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) city: Utf8PathBuf,
    pub(super) request: Utf8PathBuf,
}

impl PlanFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let city = root.join("city.json");
        let request = root.join("request.json");
        Self {
            _dir: dir,
            root,
            city,
            request,
        }
    }

    pub(super) fn with_samples() -> Self {
        let files = Self::new();
        files.write_city(&sample_city());
        files.write_preferences(&sample_preferences());
        files
    }

    pub(super) fn write_city(&self, city: &CityData) {
        write_json(&self.city, city);
    }

    pub(super) fn write_preferences(&self, preferences: &TripPreferences) {
        write_json(&self.request, preferences);
    }
}
