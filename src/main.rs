//! Prints the stationary distribution of the airport routes example.
//!
//! stdout carries only the vector, so it can be diffed directly. The ranking
//! and per-iteration residuals go to stderr through the logger:
//!
//! ```bash
//! cargo run --bin airrank
//! RUST_LOG=info cargo run --bin airrank    # ranking table
//! RUST_LOG=debug cargo run --bin airrank   # plus per-iteration residuals
//! ```

use airrank::{airports, top_k};
use log::info;

fn format_vector(x: &[f64]) -> String {
    let parts: Vec<String> = x.iter().map(|v| format!("{v:.8}")).collect();
    format!("[{}]", parts.join(" "))
}

fn ranking_lines(scores: &[f64]) -> Vec<String> {
    top_k(scores, scores.len())
        .into_iter()
        .enumerate()
        .map(|(rank, (node, score))| {
            let code = airports::code(node).unwrap_or("?");
            format!("{:>4}  {code:<7}  {score:.8}", rank + 1)
        })
        .collect()
}

fn main() -> airrank::Result<()> {
    env_logger::init();

    let run = airports::stationary_distribution()?;
    println!("{}", format_vector(&run.scores));

    info!("rank  airport  score");
    for line in ranking_lines(&run.scores) {
        info!("{line}");
    }
    Ok(())
}
