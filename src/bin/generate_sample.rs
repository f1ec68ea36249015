//! Generates sample trip logs for the three cities so the explorer can be
//! exercised without the original datasets.
//!
//! Usage: `generate_sample [output-dir]` (default: current directory).
//! Output is deterministic for a given seed.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};

use bikeshare_explorer::data::model::City;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[0, bound)`.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

fn stations(city: City) -> Vec<&'static str> {
    match city {
        City::Chicago => vec![
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Michigan Ave & Oak St",
            "Canal St & Adams St",
            "Theater on the Lake",
        ],
        City::NewYorkCity => vec![
            "Pershing Square North",
            "E 17 St & Broadway",
            "Broadway & E 22 St",
            "W 21 St & 6 Ave",
            "West St & Chambers St",
            "Lafayette St & E 8 St",
        ],
        City::Washington => vec![
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
            "4th & M St SW",
        ],
    }
}

/// Random start time in January–June 2017, with a mild rush-hour bias.
fn start_time(rng: &mut SimpleRng) -> NaiveDateTime {
    let month = 1 + rng.below(6) as u32;
    let day = 1 + rng.below(28) as u32;
    // Commute peaks get extra weight.
    let hour = if rng.next_f64() < 0.4 {
        [8u32, 9, 17, 18][rng.below(4) as usize]
    } else {
        rng.below(24) as u32
    };
    NaiveDate::from_ymd_opt(2017, month, day)
        .expect("valid generated date")
        .and_hms_opt(hour, rng.below(60) as u32, rng.below(60) as u32)
        .expect("valid generated time")
}

fn write_city(dir: &Path, city: City, rows: usize, seed: u64) -> Result<()> {
    let with_demographics = !matches!(city, City::Washington);
    let path = dir.join(city.data_file());
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if with_demographics {
        header.extend(["Gender", "Birth Year"]);
    }
    writer.write_record(&header)?;

    let mut rng = SimpleRng::new(seed);
    let stations = stations(city);

    for row in 0..rows {
        let start = start_time(&mut rng);
        let duration = rng.gauss(700.0, 300.0).max(60.0).round();
        let end = start + Duration::seconds(duration as i64);

        let start_station = rng.pick(&stations);
        let end_station = rng.pick(&stations);
        let user_type = if rng.next_f64() < 0.8 {
            "Subscriber"
        } else {
            "Customer"
        };

        let mut record = vec![
            row.to_string(),
            start.format("%Y-%m-%d %H:%M:%S").to_string(),
            end.format("%Y-%m-%d %H:%M:%S").to_string(),
            format!("{duration:.1}"),
            start_station.to_string(),
            end_station.to_string(),
            user_type.to_string(),
        ];
        if with_demographics {
            // A few riders leave demographics blank, as in the real files.
            if rng.next_f64() < 0.9 {
                record.push(rng.pick(&["Male", "Male", "Female"]).to_string());
                record.push(format!("{}.0", 1950 + rng.below(50)));
            } else {
                record.push(String::new());
                record.push(String::new());
            }
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    println!("wrote {} rows to {}", rows, path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let dir = Path::new(&dir);

    write_city(dir, City::Chicago, 400, 42)?;
    write_city(dir, City::NewYorkCity, 500, 43)?;
    write_city(dir, City::Washington, 300, 44)?;
    Ok(())
}
