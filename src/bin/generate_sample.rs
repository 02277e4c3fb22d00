use anyhow::{Context, Result};

/// Launch sites with their relative traffic and base success probability.
const SITES: [(&str, u32, f64); 4] = [
    ("CCAFS LC-40", 26, 0.27),
    ("VAFB SLC-4E", 10, 0.40),
    ("KSC LC-39A", 13, 0.77),
    ("CCAFS SLC-40", 7, 0.43),
];

/// Booster generations in flight order, with the payload ceiling they lifted.
const BOOSTERS: [(&str, f64); 5] = [
    ("v1.0", 700.0),
    ("v1.1", 4500.0),
    ("FT", 9600.0),
    ("B4", 7100.0),
    ("B5", 5400.0),
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
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // One entry per launch, sites interleaved proportionally to their traffic.
    let mut schedule: Vec<usize> = SITES
        .iter()
        .enumerate()
        .flat_map(|(i, &(_, launches, _))| std::iter::repeat(i).take(launches as usize))
        .collect();
    for i in (1..schedule.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        schedule.swap(i, j);
    }

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;

    let n = schedule.len();
    for (row, &site_idx) in schedule.iter().enumerate() {
        let (site, _, base_success) = SITES[site_idx];

        // Later flights use later boosters and succeed more often.
        let booster_idx = (row * BOOSTERS.len() / n).min(BOOSTERS.len() - 1);
        let (category, ceiling) = BOOSTERS[booster_idx];
        let payload = (rng.next_f64() * ceiling).round();
        let p_success = (base_success + 0.1 * booster_idx as f64).min(0.95);
        let class = u8::from(rng.next_f64() < p_success);

        writer.write_record([
            row.to_string(),
            (row + 1).to_string(),
            site.to_string(),
            class.to_string(),
            format!("{payload:.1}"),
            format!("F9 {category}  B{}", 1000 + row),
            category.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {n} launches across {} sites to {output_path}", SITES.len());
    Ok(())
}
