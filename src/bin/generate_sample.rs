use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const SITES: [(&str, f64); 4] = [
    // (site, share of launches)
    ("CCAFS LC-40", 0.45),
    ("VAFB SLC-4E", 0.15),
    ("KSC LC-39A", 0.25),
    ("CCAFS SLC-40", 0.15),
];

/// Booster generations in flight order: (prefix, flights, success rate, max payload)
const BOOSTERS: [(&str, usize, f64, f64); 4] = [
    ("F9 v1.0", 5, 0.2, 700.0),
    ("F9 v1.1", 15, 0.35, 4500.0),
    ("F9 FT", 24, 0.75, 9600.0),
    ("F9 B4", 12, 0.8, 7000.0),
];

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

    /// Pick an index according to `weights` (which sum to 1).
    fn weighted(&mut self, weights: impl Iterator<Item = f64>) -> usize {
        let u = self.next_f64();
        let mut acc = 0.0;
        let mut last = 0;
        for (i, w) in weights.enumerate() {
            acc += w;
            last = i;
            if u < acc {
                return i;
            }
        }
        last
    }
}

struct Launch {
    flight: i64,
    site: &'static str,
    class: i64,
    payload: f64,
    booster: String,
    category: &'static str,
}

fn generate(rng: &mut SimpleRng) -> Vec<Launch> {
    let mut launches = Vec::new();
    let mut flight = 1;

    for (prefix, flights, success_rate, max_payload) in BOOSTERS {
        for serial in 0..flights {
            let site = SITES[rng.weighted(SITES.iter().map(|s| s.1))].0;
            // Early flights flew dummy payloads; keep a few zero-mass rows.
            let payload = if rng.next_f64() < 0.05 {
                0.0
            } else {
                (rng.next_f64() * max_payload).round()
            };
            let class = i64::from(rng.next_f64() < success_rate);

            launches.push(Launch {
                flight,
                site,
                class,
                payload,
                booster: format!("{prefix}  B{}", 1000 + flight * 3 + serial as i64),
                category: prefix.trim_start_matches("F9 "),
            });
            flight += 1;
        }
    }
    launches
}

fn write_csv(path: &str, launches: &[Launch]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record([
        "",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;
    for (i, l) in launches.iter().enumerate() {
        writer.write_record([
            i.to_string(),
            l.flight.to_string(),
            l.site.to_string(),
            l.class.to_string(),
            format!("{:.1}", l.payload),
            l.booster.clone(),
            l.category.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, launches: &[Launch]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.flight))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.site))),
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
            Arc::new(Float64Array::from_iter_values(launches.iter().map(|l| l.payload))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.booster.as_str()))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.category))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let launches = generate(&mut rng);

    write_csv("sample_launches.csv", &launches)?;
    write_parquet("sample_launches.parquet", &launches)?;

    let successes = launches.iter().filter(|l| l.class == 1).count();
    println!(
        "Wrote {} launches ({successes} successful) to sample_launches.csv and sample_launches.parquet",
        launches.len()
    );
    Ok(())
}
