use clap::Args;
use receipt_rewards::error::AppError;
use receipt_rewards::processing::{validate_receipt, ReceiptSubmission, ScoringEngine};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON file (retailer, purchaseDate, purchaseTime,
    /// items, total; all leaf values as text)
    #[arg(long)]
    pub(crate) file: PathBuf,
}

/// Score a receipt offline and print the per-rule breakdown. Nothing is
/// stored and no identifier is issued.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file)?;
    let submission: ReceiptSubmission = serde_json::from_str(&raw)?;
    let receipt = validate_receipt(submission)?;
    let summary = ScoringEngine::new().score(&receipt);

    println!(
        "Receipt from {} on {} at {}",
        receipt.retailer, receipt.purchase_date, receipt.purchase_time
    );
    for component in &summary.components {
        println!("- {}", component.note);
    }
    println!("Total: {} points", summary.total_points);

    Ok(())
}
