use std::collections::BTreeMap;

use effect_direction::{
    EstimatorOptions, MultiChainDraws, PosteriorDraws, ReportOptions, render_effects_table,
    summarize_model,
};
use faer::Mat;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing_subscriber::EnvFilter;

const NAMES: [&str; 4] = ["(Intercept)", "Emotion", "Sex", "Emotion:Sex"];
const CENTERS: [f64; 4] = [3.2, 0.45, -0.3, 0.05];
const SCALES: [f64; 4] = [0.12, 0.1, 0.14, 0.2];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let chains = (0..4).map(|seed| simulate_chain(1_000, seed)).collect();
    let draws = MultiChainDraws::new(chains).expect("chains share coefficients");
    let effects = summarize_model(&draws, ReportOptions::default()).expect("report");

    if let Some(description) = &effects.description {
        println!("{description}");
    }
    println!("{}", render_effects_table(&effects, 3));
    for effect in effects.excluding_zero() {
        println!("{}: MEDP = {:.2}%", effect.label, effect.summary.medp);
    }

    // A bare mapping works too, here with an 89% interval.
    let mut mapping = BTreeMap::new();
    mapping.insert("Age".to_owned(), draws.pooled_column(1).expect("Emotion column"));
    let options = ReportOptions {
        estimator: EstimatorOptions {
            confidence_level: 89.0,
            ..EstimatorOptions::default()
        },
        parallel: false,
    };
    let effects = summarize_model(&mapping, options).expect("report");
    println!("{}", render_effects_table(&effects, 3));
}

fn simulate_chain(draws: usize, seed: u64) -> PosteriorDraws {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<f64> = (0..draws * NAMES.len())
        .map(|index| {
            let column = index % NAMES.len();
            SCALES[column].mul_add(standard_normal(&mut rng), CENTERS[column])
        })
        .collect();

    PosteriorDraws::new(
        Mat::from_fn(draws, NAMES.len(), |i, j| values[i * NAMES.len() + j]),
        NAMES.iter().map(|name| (*name).to_owned()).collect(),
    )
    .with_description("Subjective_Valence ~ Emotion * Sex")
}

fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1 = (1.0_f64 - rng.random::<f64>()).max(f64::MIN_POSITIVE);
    let u2 = rng.random::<f64>();
    (-2.0_f64 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
