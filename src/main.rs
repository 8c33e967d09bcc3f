use grader::banner;
use grader::{ClientConfig, Grader, GradingClient, GradingJob, GradingResult};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Make sure GRADING_API_KEY is set in your environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let Some(job_path) = std::env::args().nth(1) else {
        eprintln!("Usage: grader <job-file.toml|job-file.json>");
        return ExitCode::FAILURE;
    };

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let job = match GradingJob::from_file(&job_path) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("❌ Could not load job '{}': {}", job_path, e);
            return ExitCode::FAILURE;
        }
    };

    let client = match GradingClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Could not build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run_job(&client, &job).await;
    print_result(&result);

    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run_job<G: Grader>(grader: &G, job: &GradingJob) -> GradingResult {
    match job.submission_text() {
        Ok(text) => grader.grade(&text, &job.criteria).await,
        Err(e) => e.into(),
    }
}

fn print_result(result: &GradingResult) {
    if !result.is_success() {
        println!("❌ Error: {}", result.error);
        return;
    }

    println!("✅ Score: {}", result.score);
    println!("Errors:");
    for error in &result.errors {
        println!("  - {}", error);
    }
    println!("Suggestions:");
    for suggestion in &result.suggestions {
        println!("  - {}", suggestion);
    }
}
