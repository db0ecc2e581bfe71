// demos/demo.rs
use gbm_mc::bond::Bond;
use gbm_mc::mc::path_engine::{generate_paths, PathConfig};
use gbm_mc::models::gbm::Gbm;
use gbm_mc::output;
use gbm_mc::stats::{describe, log_returns};
use log::info;

fn main() {
    pretty_env_logger::init();

    run_path_demo();
    run_bond_demo();
}

fn run_path_demo() {
    println!("=== GBM path simulation ===");

    let model = Gbm::new(100.0, 0.05, 0.25).expect("valid parameters");
    let cfg = PathConfig {
        horizon: 10.0,
        steps: 50,
        paths: 2000,
        seed: 42,
    };

    let paths = generate_paths(&model, &cfg).expect("valid configuration");
    info!("simulated {} paths x {} steps", cfg.paths, cfg.steps);

    let returns = log_returns(&paths).expect("strictly positive paths");
    let sample: Vec<f64> = returns.iter().copied().collect();
    let stats = describe(&sample).expect("non-empty sample");

    println!("{:<22} {:>14}", "statistic", "value");
    println!("{:<22} {:>14}", "size", stats.size);
    println!("{:<22} {:>14.6}", "min", stats.min);
    println!("{:<22} {:>14.6}", "max", stats.max);
    println!("{:<22} {:>14.6}", "mean", stats.mean);
    println!("{:<22} {:>14.6}", "std", stats.std);
    println!("{:<22} {:>14.6}", "skew", stats.skew);
    println!("{:<22} {:>14.6}", "kurtosis", stats.kurtosis);

    let dt = cfg.dt();
    let theoretical_mean = (model.mu - 0.5 * model.sigma * model.sigma) * dt;
    println!(
        "theoretical per-step mean {:.6}, std {:.6}",
        theoretical_mean,
        model.sigma * dt.sqrt()
    );

    // First 10 paths only, like a quick-look chart.
    output::paths_to_csv_file("paths.csv", &paths, dt, 10).expect("write paths.csv");
    output::stats_to_csv_file("log_return_stats.csv", "log_returns", &stats)
        .expect("write log_return_stats.csv");
    println!("wrote paths.csv and log_return_stats.csv\n");
}

fn run_bond_demo() {
    println!("=== Bond accrual ===");

    let bond = Bond::new(100.0, 10.0, 2.0, 0.08).expect("valid parameters");
    let series = bond.value_series(10.0).expect("valid time range");

    for (time, value) in &series {
        println!("year {:>4.0}: {:>10.4}", time, value);
    }
    println!(
        "value at maturity: {:.4}",
        bond.value_at_maturity().expect("valid parameters")
    );

    output::value_series_to_csv_file("bond_value.csv", &series).expect("write bond_value.csv");
    println!("wrote bond_value.csv");
}
