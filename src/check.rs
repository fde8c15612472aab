use console::Style;

use crate::client::MapsClient;
use crate::config::Config;
use crate::endpoint::Endpoint;
use crate::progress::{check_spinner, finish_spinner};
use crate::results::print_summary;
use crate::types::{CheckResult, ResultSet};

/// Request one endpoint and classify the response. Never fails: transport
/// and parse errors become `CheckResult::TransportError`.
pub async fn run_endpoint_check(client: &MapsClient, config: &Config, endpoint: Endpoint) -> CheckResult {
    let pb = check_spinner(&format!("Testing {}...", endpoint.label()));

    let result = match client.get_json(endpoint.path(), &endpoint.params(config)).await {
        Ok(body) => endpoint.classify(body),
        Err(e) => CheckResult::TransportError(format!("{e:#}")),
    };

    finish_spinner(&pb, result.passed());
    print_outcome(endpoint, &result);
    result
}

fn print_outcome(endpoint: Endpoint, result: &CheckResult) {
    let green = Style::new().green().bold();
    let red = Style::new().red().bold();
    let dim = Style::new().dim();

    match result {
        CheckResult::Success(body) => {
            println!("  {} {}", green.apply_to("PASS"), endpoint.label());
            for line in endpoint.highlights(body) {
                println!("       {}", dim.apply_to(line));
            }
        }
        CheckResult::Failure { status, message } => {
            println!("  {} {}: {}", red.apply_to("FAIL"), endpoint.label(), status);
            if let Some(msg) = message {
                println!("       error: {msg}");
            }
        }
        CheckResult::TransportError(msg) => {
            println!("  {} {}: {}", red.apply_to("ERROR"), endpoint.label(), msg);
        }
    }
}

/// Run every endpoint check in order, regardless of earlier failures, then print the summary.
pub async fn run_all(client: &MapsClient, config: &Config) -> ResultSet {
    println!("{}", "=".repeat(60));
    println!("GOOGLE MAPS API SMOKE TEST");
    println!("{}", "=".repeat(60));

    let mut results = ResultSet::new();
    for endpoint in Endpoint::ALL {
        let result = run_endpoint_check(client, config, endpoint).await;
        results.record(endpoint.id(), result.passed());
    }

    print_summary(&results);
    results
}
