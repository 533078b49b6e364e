use bytepair_rs::text::{format_sequence, parse_sequence};
use bytepair_rs::{BpeError, Model, Trainer, TrainerConfig};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

/// Encodes a file of decimal values with byte pair merges.
///
/// Trains and saves a model when the model file does not exist yet,
/// otherwise loads it and applies its rules.
///
/// Usage: cargo run --example encode <input> <output> [model] [merges]
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if !(3..=5).contains(&args.len()) {
        eprintln!("Usage: {} <input> <output> [model] [merges]", args[0]);
        process::exit(1);
    }

    let merges = match args.get(4).map(|m| m.parse::<i64>()) {
        None => 10,
        Some(Ok(merges)) => merges,
        Some(Err(e)) => {
            eprintln!("Invalid merge count {:?}: {e}", args[4]);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args[1], &args[2], args.get(3), merges) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(
    input: &str,
    output: &str,
    model_path: Option<&String>,
    merges: i64,
) -> Result<(), BpeError> {
    let config = TrainerConfig::new(merges)?;

    let text = fs::read_to_string(input).map_err(|source| BpeError::Io {
        path: input.into(),
        source,
    })?;
    let values = parse_sequence(&text)?;
    println!("Read {} decimal values from input file", values.len());

    let encoded = match model_path {
        Some(path) if Path::new(path).exists() => {
            println!("Loading model from {path}");
            Model::load_from_path(path)?.apply(&values)
        }
        _ => {
            println!("Training model with {} merges", config.max_merges);
            let mut trainer = Trainer::new(config);
            let encoded = trainer.train(&values)?;
            if let Some(path) = model_path {
                trainer.model().save_to_path(path)?;
                println!("Saved model to {path}");
            }
            encoded
        }
    };

    fs::write(output, format_sequence(&encoded)).map_err(|source| BpeError::Io {
        path: output.into(),
        source,
    })?;

    let original_size = values.len();
    let compressed_size = encoded.len();
    let saving = (original_size - compressed_size) as f64 / original_size as f64 * 100.0;

    println!("\n=== Statistics ===");
    println!("Original size: {original_size} values");
    println!("Compressed size: {compressed_size} values");
    println!("Compression ratio: {saving:.2}%");
    Ok(())
}
