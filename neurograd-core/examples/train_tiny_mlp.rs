use log::info;
use neurograd_core::model::Mlp;
use neurograd_core::nn::losses::{MSELoss, Reduction};
use neurograd_core::nn::persistence::{load_parameters, save_parameters, LoadOutcome};
use neurograd_core::nn::Module;
use neurograd_core::optim::{Optimizer, Sgd};
use neurograd_core::NeuroGradError;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: u64 = 1337;
const EPOCHS: usize = 50;
const LEARNING_RATE: f64 = 0.05;

fn main() -> Result<(), NeuroGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Data ---
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    // --- Model & optimizer ---
    let mut rng = StdRng::seed_from_u64(SEED);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    let mut optimizer = Sgd::new(mlp.parameters(), LEARNING_RATE, 0.0)?;
    let loss_fn = MSELoss::new(Reduction::Sum);
    info!("Training a 3-4-4-1 MLP with {} parameters", mlp.num_parameters());

    // --- Training loop ---
    for epoch in 0..EPOCHS {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            preds.push(mlp.forward_numeric(x)?.into_scalar()?);
        }
        let loss = loss_fn.calculate(&preds, &ys)?;

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;

        if epoch % 10 == 0 || epoch == EPOCHS - 1 {
            info!("epoch {:>3}: loss = {:.6}", epoch, loss.data());
        }
    }

    // --- Save, then restore into a differently initialized network ---
    let path = std::env::temp_dir().join("neurograd_train_tiny_mlp.json");
    save_parameters(&mlp, &path)?;

    let reloaded = Mlp::new(3, &[4, 4, 1], &mut StdRng::seed_from_u64(SEED + 1))?;
    match load_parameters(&reloaded, &path)? {
        LoadOutcome::Restored { count } => info!("Reloaded {} parameters", count),
        LoadOutcome::NotFound => info!("Nothing to reload at {}", path.display()),
    }

    for (x, y) in xs.iter().zip(ys) {
        let trained = mlp.forward_numeric(x)?.data()[0];
        let restored = reloaded.forward_numeric(x)?.data()[0];
        println!(
            "x = {:?}  target = {:>5.2}  trained = {:>8.5}  reloaded = {:>8.5}",
            x, y, trained, restored
        );
    }

    std::fs::remove_file(&path).ok();
    Ok(())
}
