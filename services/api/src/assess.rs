use altscore::applications::ApplicationData;
use altscore::error::AppError;
use altscore::scoring::{ExplanationReport, RiskScoringEngine, ScoringResult};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Application JSON document (same shape as the POST /api/applications body)
    pub(crate) input: PathBuf,
    /// Also print the explanation report as JSON
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let application: ApplicationData = serde_json::from_str(&raw)?;

    let engine = RiskScoringEngine::default();
    let result = engine.assess(&application.applicant)?;
    let explanation = if args.explain {
        Some(engine.explain(&result, &application.applicant))
    } else {
        None
    };

    print!(
        "{}",
        render_assessment(&application, &result, explanation.as_ref())?
    );
    Ok(())
}

fn render_assessment(
    application: &ApplicationData,
    result: &ScoringResult,
    explanation: Option<&ExplanationReport>,
) -> Result<String, AppError> {
    let mut out = String::new();
    let subject = application.name.as_deref().unwrap_or("unnamed applicant");

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Risk assessment for {subject}");
    let _ = writeln!(out, "Risk score: {:.2} / 100", result.risk_score);

    if result.risk_factors.is_empty() {
        let _ = writeln!(out, "Risk factors: none");
    } else {
        let _ = writeln!(out, "Risk factors");
        for factor in &result.risk_factors {
            let _ = writeln!(out, "- {factor}");
        }
    }

    if let Some(report) = explanation {
        let _ = writeln!(out, "\nExplanation");
        let _ = writeln!(out, "{}", serde_json::to_string_pretty(report)?);
    }

    Ok(out)
}
