use samplespace::{
    choice, loguniform, randint_range, randn, uniform, Config, ParamValue, SharedRng,
};

#[test]
fn uniform_distribution_is_roughly_uniform() {
    let sampler = uniform(0.0, 1.0);
    let rng = SharedRng::with_seed(42);
    let config = Config::new();

    let n_samples = 1000;
    let mut samples = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        samples.push(rng.sample(&sampler, &config).unwrap());
    }

    for &s in &samples {
        assert!((0.0..1.0).contains(&s), "sample {s} out of range [0, 1)");
    }

    // Check distribution is roughly uniform by looking at quartiles
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let q1 = samples[n_samples / 4];
    let q2 = samples[n_samples / 2];
    let q3 = samples[3 * n_samples / 4];

    assert!((q1 - 0.25).abs() < 0.1, "Q1 {q1} should be close to 0.25");
    assert!(
        (q2 - 0.5).abs() < 0.1,
        "Q2 (median) {q2} should be close to 0.5"
    );
    assert!((q3 - 0.75).abs() < 0.1, "Q3 {q3} should be close to 0.75");
}

#[test]
fn loguniform_is_uniform_in_log_space() {
    let sampler = loguniform(1e-4, 1e-2).unwrap();
    let rng = SharedRng::with_seed(42);
    let config = Config::new();

    let n_samples = 1000;
    let mut logs = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let v = rng.sample(&sampler, &config).unwrap();
        assert!((1e-4..=1e-2).contains(&v), "sample {v} out of [1e-4, 1e-2]");
        logs.push(v.log10());
    }

    // log10(value) should be uniform over [-4, -2]
    logs.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let q1 = logs[n_samples / 4];
    let q2 = logs[n_samples / 2];
    let q3 = logs[3 * n_samples / 4];

    assert!((q1 - (-3.5)).abs() < 0.2, "Q1 {q1} should be close to -3.5");
    assert!((q2 - (-3.0)).abs() < 0.2, "Q2 {q2} should be close to -3.0");
    assert!((q3 - (-2.5)).abs() < 0.2, "Q3 {q3} should be close to -2.5");
}

#[test]
fn randint_covers_range_evenly() {
    let sampler = randint_range(1, 11);
    let rng = SharedRng::with_seed(123);
    let config = Config::new();

    let n_samples = 5000;
    let mut counts = [0u32; 10]; // counts for values 1-10
    for _ in 0..n_samples {
        let n = rng.sample(&sampler, &config).unwrap();
        assert!((1..11).contains(&n), "sample {n} out of [1, 11)");
        counts[usize::try_from(n - 1).unwrap()] += 1;
    }

    let expected = n_samples as f64 / 10.0;
    for (value, &count) in (1..).zip(counts.iter()) {
        let deviation = (f64::from(count) - expected).abs();
        assert!(
            deviation < expected * 0.3,
            "value {value} drawn {count} times, expected about {expected}"
        );
    }
}

#[test]
fn choice_covers_candidates_evenly() {
    let candidates = vec!["sgd", "adam", "rmsprop", "adagrad"];
    let sampler = choice(candidates.clone());
    let rng = SharedRng::with_seed(7);
    let config = Config::new();

    let n_samples = 4000;
    let mut counts = [0u32; 4];
    for _ in 0..n_samples {
        let v = rng.sample(&sampler, &config).unwrap();
        let idx = candidates.iter().position(|&c| c == v).unwrap();
        counts[idx] += 1;
    }

    for (candidate, &count) in candidates.iter().zip(counts.iter()) {
        assert!(
            (800..1200).contains(&count),
            "candidate {candidate} drawn {count} times, expected about 1000"
        );
    }
}

#[test]
fn randn_has_standard_moments() {
    let sampler = randn();
    let rng = SharedRng::with_seed(42);
    let config = Config::new();

    let n_samples = 10_000;
    let mut samples = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        samples.push(rng.sample(&sampler, &config).unwrap());
    }

    let mean: f64 = samples.iter().sum::<f64>() / n_samples as f64;
    let var: f64 = samples.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n_samples as f64;

    assert!(mean.abs() < 0.05, "mean {mean} should be close to 0");
    assert!((var - 1.0).abs() < 0.1, "variance {var} should be close to 1");
}

#[test]
fn builtins_ignore_the_context_argument() {
    let sampler = uniform(0.0, 1.0);

    let empty = Config::new();
    let mut populated = Config::new();
    populated.insert("lr", ParamValue::Float(0.01));
    populated.insert("layers", ParamValue::Int(3));

    // Identical seeds with different contexts must produce identical draws.
    let rng_a = SharedRng::with_seed(99);
    let rng_b = SharedRng::with_seed(99);
    for _ in 0..100 {
        let a = rng_a.sample(&sampler, &empty).unwrap();
        let b = rng_b.sample(&sampler, &populated).unwrap();
        assert!((a - b).abs() < f64::EPSILON);
    }
}

#[test]
fn trial_generator_builds_config_incrementally() {
    let lr = loguniform(1e-4, 1e-2).unwrap();
    let layers = randint_range(1, 5);
    let optimizer = choice(vec!["sgd", "adam"]);

    let rng = SharedRng::with_seed(7);
    let mut config = Config::new();

    let v = rng.sample(&lr, &config).unwrap();
    config.insert("lr", ParamValue::Float(v));

    let n = rng.sample(&layers, &config).unwrap();
    config.insert("layers", ParamValue::Int(n));

    let opt = rng.sample(&optimizer, &config).unwrap();
    assert!(["sgd", "adam"].contains(&opt));

    assert_eq!(config.len(), 2);
    assert!(matches!(config.get("lr"), Some(ParamValue::Float(_))));
    assert!(matches!(config.get("layers"), Some(ParamValue::Int(_))));
}

#[test]
fn samplers_are_shareable_across_threads() {
    use std::sync::Arc;

    let sampler = Arc::new(uniform(0.0, 1.0));
    let rng = Arc::new(SharedRng::with_seed(42));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sampler = Arc::clone(&sampler);
            let rng = Arc::clone(&rng);
            std::thread::spawn(move || {
                let config = Config::new();
                let mut values = Vec::with_capacity(250);
                for _ in 0..250 {
                    values.push(rng.sample(&sampler, &config).unwrap());
                }
                values
            })
        })
        .collect();

    let mut total = 0;
    for handle in handles {
        let values = handle.join().unwrap();
        for v in &values {
            assert!((0.0..1.0).contains(v));
        }
        total += values.len();
    }
    assert_eq!(total, 1000);
}
