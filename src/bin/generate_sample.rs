use std::fs::File;
use std::io::{BufWriter, Result, Write};

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

struct SampleNode {
    node_num: u32,
    x: f64,
    y: f64,
    z: f64,
    uy: f64,
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // 60 m blade, stations every 2 m, four chordwise samples per station.
    // The zero fraction puts one node exactly on the pitch axis.
    let span = 60.0;
    let stations: Vec<f64> = (0..=30).map(|i| i as f64 * 2.0).collect();
    let chord_fractions = [-0.25, 0.0, 0.35, 0.75];

    let mut nodes = Vec::new();
    let mut node_num: u32 = 0;
    for &z in &stations {
        let chord = 3.2 * (1.0 - 0.7 * z / span);
        for &frac in &chord_fractions {
            node_num += 1;

            // Tip-loaded cantilever shape plus measurement noise.
            let s = z / span;
            let uy = 1.2 * (3.0 * s * s - s * s * s) / 2.0 + rng.gauss(0.0, 0.003);

            nodes.push(SampleNode {
                node_num,
                x: frac * chord,
                y: 0.08 * chord * (1.0 - frac.abs()) + rng.gauss(0.0, 0.002),
                z,
                uy,
            });
        }
    }

    write_node_list("NLIST.lis", &nodes)?;
    write_solution("PRNSOL.lis", &nodes)?;

    println!(
        "Wrote {} nodes ({} stations) to NLIST.lis and PRNSOL.lis",
        nodes.len(),
        stations.len()
    );
    Ok(())
}

fn write_node_list(path: &str, nodes: &[SampleNode]) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(w, " LIST ALL SELECTED NODES.   DSYS=      0")?;
    for (i, n) in nodes.iter().enumerate() {
        // ANSYS paginates the listing, repeating the column header.
        if i % 20 == 0 {
            writeln!(w)?;
            writeln!(
                w,
                "    NODE        X             Y             Z           THXY     THYZ     THZX"
            )?;
        }
        writeln!(
            w,
            " {:>7} {:>14.7} {:>14.7} {:>14.7} {:>8.2} {:>8.2} {:>8.2}",
            n.node_num, n.x, n.y, n.z, 0.0, 0.0, 0.0
        )?;
    }
    Ok(())
}

fn write_solution(path: &str, nodes: &[SampleNode]) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(w, " PRINT UY   NODAL SOLUTION PER NODE")?;
    writeln!(w)?;
    writeln!(w, "  ***** POST1 NODAL DEGREE OF FREEDOM LISTING *****")?;
    writeln!(w)?;
    writeln!(w, "   LOAD STEP=     1  SUBSTEP=     1")?;
    writeln!(w, "    TIME=    1.0000      LOAD CASE=   0")?;
    writeln!(w)?;
    writeln!(w, "    NODE      UY")?;

    let mut max = (0u32, 0.0f64);
    for n in nodes {
        writeln!(w, " {:>7}   {:>13.5E}", n.node_num, n.uy)?;
        if n.uy.abs() > max.1.abs() {
            max = (n.node_num, n.uy);
        }
    }

    writeln!(w)?;
    writeln!(w, " MAXIMUM ABSOLUTE VALUES")?;
    writeln!(w, " NODE   {:>9}", max.0)?;
    writeln!(w, " VALUE  {:>13.5E}", max.1)?;
    Ok(())
}
