//! Utility to compute daily targets from the command line

use macrocal::content::ContentDoc;
use macrocal::energy;
use macrocal::models::{BiometricInput, Sex, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: compute_targets <age> <height> <weight> [activity_level] [metric|imperial] [female|male]"
        );
        std::process::exit(2);
    }

    let age: f64 = args[0].parse()?;
    let height: f64 = args[1].parse()?;
    let weight: f64 = args[2].parse()?;
    let activity_level: f64 = match args.get(3) {
        Some(s) => s.parse()?,
        None => 1.2,
    };
    let units = args
        .get(4)
        .and_then(|s| UnitSystem::from_str(s))
        .unwrap_or(UnitSystem::Metric);
    let sex = args
        .get(5)
        .and_then(|s| Sex::from_str(s))
        .unwrap_or(Sex::Male);

    let input = BiometricInput {
        units,
        sex,
        sex_adjustment: true,
        age,
        height,
        weight,
        activity_level,
        adjustment_factor: 1.0,
        delta: 0.0,
    };

    let resolved = ContentDoc::resolve(None);
    let split = resolved.split_or_default();
    let breakdown = energy::compute_breakdown(&input, &split);

    println!("Daily targets:");
    println!("  Calories: {} per day", breakdown.calories);
    println!("  Protein:  {} g", breakdown.protein);
    println!("  Carbs:    {} g", breakdown.carbs);
    println!("  Fat:      {} g", breakdown.fat);

    Ok(())
}
