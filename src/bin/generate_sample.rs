use anyhow::{Context, Result};

const HEADER: [&str; 8] = [
    "Date/Time",
    "Depth",
    "Temp Out( degF)",
    "Temp In(degF)",
    "ROP(1 ft)",
    "WOB (k-lbs)",
    "Surface Torque (psi)",
    "Pump Press (psi)",
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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One synthetic log row at `depth` feet.
fn sample_row(depth: f64, minute: usize, rng: &mut SimpleRng) -> Vec<String> {
    let frac = depth / 8000.0;
    // Formation heats the returning mud more as the hole deepens.
    let temp_in = 95.0 + rng.gauss(0.0, 1.5);
    let temp_out = temp_in + 5.0 + 60.0 * frac + rng.gauss(0.0, 2.0);
    // Harder rock lower down: slower penetration, more weight and torque.
    let rop = (45.0 - 30.0 * frac + rng.gauss(0.0, 4.0)).max(0.5);
    let wob = (12.0 + 18.0 * frac + rng.gauss(0.0, 2.0)).max(0.0);
    let torque = 900.0 + 1400.0 * frac + rng.gauss(0.0, 60.0);
    let pump = 1800.0 + rng.gauss(0.0, 40.0);

    vec![
        format!("2021-01-{:02} {:02}:{:02}", 1 + minute / 1440, minute / 60 % 24, minute % 60),
        format!("{depth:.1}"),
        format!("{temp_out:.2}"),
        format!("{temp_in:.2}"),
        format!("{rop:.2}"),
        format!("{wob:.2}"),
        format!("{torque:.1}"),
        format!("{pump:.1}"),
    ]
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "geothermal.csv";

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    // Row 0: metadata, row 1: column names, then data.
    writer.write_record(["Utah FORGE 16A(78)-32 – synthetic drilling log"])?;
    writer.write_record(HEADER)?;

    let n_rows = 4000;
    for i in 0..n_rows {
        let depth = 85.0 + i as f64 * 2.0;
        let mut row = sample_row(depth, i, &mut rng);

        // Sensor dropouts, as seen in real logs.
        if i % 397 == 13 {
            row[2] = "-999.25x".to_string();
        }
        if i % 911 == 7 {
            row[4] = String::new();
        }
        if i % 1499 == 3 {
            row[1] = "N/A".to_string();
        }
        writer.write_record(&row)?;
    }
    writer.flush().context("flushing CSV output")?;

    println!("Wrote {n_rows} drilling log rows to {output_path}");
    Ok(())
}
