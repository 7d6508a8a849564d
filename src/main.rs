use std::io::Read;

use clap::{Parser, Subcommand};
use serde::Serialize;

use visibility_guard::{
    analyze_mention, calculate_visibility_score, run_calibration, BusinessContext, MentionAnalysis,
    PromptType, ScoreBreakdown,
};

#[derive(Parser)]
#[command(
    name = "visibility-guard",
    about = "Score business visibility in AI assistant responses",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score response text against a business (reads stdin if no files given)
    Score {
        /// Canonical business name to look for
        #[arg(long)]
        name: String,
        /// Query shape the response came from: local-search or direct-query
        #[arg(long, default_value = "local-search")]
        prompt_type: String,
        #[arg(long, default_value = "")]
        industry: String,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long)]
        canton: Option<String>,
        /// Comma-separated list of offered services
        #[arg(long)]
        services: Option<String>,
        /// File paths holding response text
        files: Vec<String>,
    },
    /// Run the calibration dataset through the scorer and report accuracy
    Calibrate,
}

#[derive(Serialize)]
struct ScoreReport {
    analysis: MentionAnalysis,
    breakdown: ScoreBreakdown,
}

fn parse_prompt_type(raw: &str) -> PromptType {
    match raw {
        "local-search" | "local_search" => PromptType::LocalSearch,
        "direct-query" | "direct_query" => PromptType::DirectQuery,
        other => {
            eprintln!("Unknown prompt type '{other}' (expected local-search or direct-query)");
            std::process::exit(2);
        }
    }
}

fn score_text(text: &str, business: &BusinessContext, prompt_type: PromptType) {
    let report = ScoreReport {
        analysis: analyze_mention(text, business),
        breakdown: calculate_visibility_score(text, &business.name, prompt_type),
    };
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Score {
            name,
            prompt_type,
            industry,
            city,
            canton,
            services,
            files,
        } => {
            let prompt_type = parse_prompt_type(&prompt_type);
            let business = BusinessContext {
                name,
                industry,
                city,
                canton,
                services: services
                    .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
                    .unwrap_or_default(),
            };

            if files.is_empty() {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .expect("Failed to read stdin");
                score_text(&input, &business, prompt_type);
            } else {
                for path in &files {
                    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                        eprintln!("Error reading {path}: {e}");
                        std::process::exit(1);
                    });
                    score_text(&text, &business, prompt_type);
                }
            }
        }
        Command::Calibrate => {
            let report = run_calibration();
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
    }
}
