//! Human-readable report rendering.

use veriface_client::ClientError;
use veriface_models::ValidationResult;

/// Map the provider's face-match result code to a conclusion line.
///
/// Codes 1, 2, and 3 are the provider's documented outcomes; anything
/// else is echoed numerically rather than guessed at.
pub fn conclusion(result_code: i32) -> String {
    match result_code {
        1 => "Match: same person".to_string(),
        2 => "No match: different person".to_string(),
        3 => "Unable to confirm a match".to_string(),
        other => format!("Unrecognized result code: {other}"),
    }
}

/// Extra guidance for errors the user can likely fix themselves.
pub fn hint_for(error: &ClientError) -> Option<&'static str> {
    match error.status() {
        Some(400) => {
            Some("Hint: double-check that the name and ID number are correct and belong together.")
        }
        _ => None,
    }
}

/// Render the full validation report.
pub fn render_report(result: &ValidationResult) -> String {
    let mut report = String::new();

    if result.success {
        report.push_str(&format!("Verdict: {}\n", conclusion(result.result_code)));
        if !result.message.is_empty() {
            report.push_str(&format!("Provider message: {}\n", result.message));
        }
        if result.has_score() {
            report.push_str(&format!("Similarity: {:.2}%\n", result.score * 100.0));
        }
        report.push_str("\nIdentity record:\n");
        report.push_str(&format!("  Sex:      {}\n", or_not_provided(&result.sex)));
        report.push_str(&format!("  Birthday: {}\n", or_not_provided(&result.birthday)));
        report.push_str(&format!("  Address:  {}\n", or_not_provided(&result.address)));
    } else {
        report.push_str("Provider call failed\n");
        if !result.message.is_empty() {
            report.push_str(&format!("Provider message: {}\n", result.message));
        }
    }

    report.push_str("\nRaw response:\n");
    report.push_str(&pretty_raw(&result.raw_response));
    report.push('\n');

    report
}

fn or_not_provided(value: &str) -> &str {
    if value.is_empty() {
        "(not provided)"
    } else {
        value
    }
}

/// Pretty-print the raw body when it is valid JSON, otherwise verbatim.
fn pretty_raw(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}
