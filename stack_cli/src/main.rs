//! # Stackpost CLI Application
//!
//! Terminal driver for the stacked post-and-beam design engine. Runs the
//! four-level demonstration stack and prints the per-level designs,
//! followed by a JSON dump of the full result records.

use std::io::{self, BufRead, Write};

use stack_core::calculations::stack::{process_stack, LevelOutcome, StackInput, StackLevel};
use stack_core::materials::DesignCriteria;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Stackpost CLI - Stacked Post & Connection Designer");
    println!("==================================================");
    println!();

    let lvl_bearing_psi =
        prompt_f64("Enter allowable LVL bearing stress (psi) [500.0]: ", 500.0);

    println!();
    println!("Designing 4-level demonstration stack...");
    println!();

    let input = StackInput {
        label: "Demo Stack".to_string(),
        levels: vec![
            StackLevel {
                post_length_in: 120.0,
                beam_load_kips: 56.0,
                beam_width_in: 3.0,
                beam_depth_in: 12.0,
            },
            StackLevel {
                post_length_in: 96.0,
                beam_load_kips: 40.0,
                beam_width_in: 3.5,
                beam_depth_in: 14.0,
            },
            StackLevel {
                post_length_in: 144.0,
                beam_load_kips: 20.0,
                beam_width_in: 2.5,
                beam_depth_in: 10.0,
            },
            StackLevel {
                post_length_in: 144.0,
                beam_load_kips: 0.1,
                beam_width_in: 2.5,
                beam_depth_in: 10.0,
            },
        ],
        criteria: DesignCriteria {
            lvl_bearing_psi,
            ..DesignCriteria::default()
        },
    };

    let results = process_stack(&input);

    println!("═══════════════════════════════════════");
    println!("  STACK DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    println!();

    let mut designed = 0;
    for result in &results {
        match &result.outcome {
            LevelOutcome::Designed { selection, plates } => {
                designed += 1;
                println!(
                    "Level {} {} (P_total = {:.1} kips)",
                    result.level,
                    status_icon(true),
                    result.total_load_kips
                );
                println!(
                    "  Post:        {} (KL/r = {:.1}, interaction = {:.2})",
                    selection.section.designation, selection.slenderness, selection.interaction
                );
                println!("  Cap plate:   {}", plates.cap_plate);
                println!("  Bearing:     2 plates, {}", plates.bearing_plate);
                println!("  LVL bearing: {:.1} psi", plates.bearing_stress_psi);
                println!("  Weld:        {:.3} in", plates.weld_size_in);
            }
            LevelOutcome::Failed { error } => {
                println!(
                    "Level {} {} (P_total = {:.1} kips)",
                    result.level,
                    status_icon(false),
                    result.total_load_kips
                );
                println!("  Error: {}", error);
            }
        }
        println!();
    }

    println!("═══════════════════════════════════════");
    println!("  RESULT: {}/{} levels designed", designed, results.len());
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&results) {
        println!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
