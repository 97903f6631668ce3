use std::fmt::Write as _;

/// Eigenvalue of component `rank` for a protein-like covariance spectrum:
/// a power-law decay with a little multiplicative noise.
fn eigenvalue(rank: usize, amplitude: f64, exponent: f64, noise: f64) -> f64 {
    amplitude * (rank as f64).powf(-exponent) * (1.0 + noise)
}

/// Seeded jitter source (splitmix64); only needs to be repeatable.
struct Jitter(u64);

impl Jitter {
    /// Uniform value in `[-spread, spread)`.
    fn next(&mut self, spread: f64) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        let unit = (z >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * spread
    }
}

fn main() {
    let mut jitter = Jitter(42);

    let n_components = 30;
    let mut values: Vec<f64> = (1..=n_components)
        .map(|rank| eigenvalue(rank, 2.4, 1.3, jitter.next(0.07)))
        .collect();
    // gmx covar writes eigenvalues largest-first.
    values.sort_by(|a, b| b.total_cmp(a));

    let mut xvg = String::new();
    let header = [
        "# This file was created by generate_sample",
        "# Synthetic eigenvalues shaped like `gmx covar` output",
        "#",
        "@    title \"Eigenvalues of the covariance matrix\"",
        "@    xaxis  label \"Eigenvector index\"",
        "@    yaxis  label \"(nm\\S2\\N)\"",
        "@TYPE xy",
    ];
    for line in header {
        xvg.push_str(line);
        xvg.push('\n');
    }
    for (idx, value) in values.iter().enumerate() {
        writeln!(xvg, "{:>10}   {:.6}", idx + 1, value).expect("writing to a String cannot fail");
    }

    let output_path = "eigenval.xvg";
    std::fs::write(output_path, xvg).expect("Failed to write output file");

    println!(
        "Wrote {} eigenvalues (total variance {:.4}) to {output_path}",
        values.len(),
        values.iter().sum::<f64>()
    );
}
