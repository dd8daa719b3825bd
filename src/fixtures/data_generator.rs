use std::fmt::Write as _;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::types::{LoadRecord, Point};

const HEADER: &str = "loadNumber pickup dropoff";

fn random_point(rng: &mut ChaCha8Rng, extent: f64) -> Point {
    Point::new(
        rng.gen_range(-extent..=extent),
        rng.gen_range(-extent..=extent),
    )
}

/// Seeded random loads with pickups and drop-offs in `[-extent, extent]` on both axes.
pub fn generate_random_loads(count: usize, extent: f64, seed: u64) -> Vec<LoadRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let records: Vec<LoadRecord> = (0..count)
        .map(|_| LoadRecord {
            pickup: random_point(&mut rng, extent),
            dropoff: random_point(&mut rng, extent),
        })
        .collect();

    info!(
        "Generated {} loads within +/-{} (seed {})",
        records.len(),
        extent,
        seed
    );
    records
}

/// Renders records in the input file format, labelled 1..=N.
pub fn render_load_file(records: &[LoadRecord]) -> String {
    let mut out = String::with_capacity(HEADER.len() + records.len() * 40);
    out.push_str(HEADER);
    out.push('\n');
    for (ind, record) in records.iter().enumerate() {
        // infallible for String
        let _ = writeln!(out, "{} {} {}", ind + 1, record.pickup, record.dropoff);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::reader::parse_loads;

    #[test]
    fn same_seed_same_loads() {
        assert_eq!(
            generate_random_loads(30, 200.0, 7),
            generate_random_loads(30, 200.0, 7)
        );
        assert_ne!(
            generate_random_loads(30, 200.0, 7),
            generate_random_loads(30, 200.0, 8)
        );
    }

    #[test]
    fn points_stay_within_extent() {
        for record in generate_random_loads(200, 50.0, 1) {
            for p in [record.pickup, record.dropoff] {
                assert!(p.x.abs() <= 50.0 && p.y.abs() <= 50.0);
            }
        }
    }

    #[test]
    fn rendered_file_reads_back() {
        let records = generate_random_loads(12, 150.0, 42);
        let text = render_load_file(&records);
        assert!(text.starts_with("loadNumber pickup dropoff\n"));
        assert_eq!(parse_loads(&text).unwrap(), records);
    }
}
