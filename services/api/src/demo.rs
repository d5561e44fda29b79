use bookrate::error::AppError;
use bookrate::rates::{
    calculate, validate, PromotionCandidate, PromotionType, RateRequest, RateResult,
};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Undiscounted nightly price for the sample quote
    #[arg(long)]
    pub(crate) base_rate: Option<f64>,
    /// Commission percentage retained on the final customer price
    #[arg(long)]
    pub(crate) commission: Option<f64>,
}

/// Runs the canned scenarios used when demoing the stacking policy: a
/// basic/target/genius stack and a deep deal overriding the lot.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let base_rate = args.base_rate.unwrap_or(100.0);
    let commission = args.commission.unwrap_or(15.0);

    let stacked = quote(
        base_rate,
        commission,
        vec![
            promotion("Early Booker", PromotionType::Basic, 10.0),
            promotion("Mobile Rate", PromotionType::Target, 5.0),
            promotion("Genius Level 2", PromotionType::Genius, 10.0),
        ],
    )?;
    render("Stacked promotions (basic + target + genius)", &stacked);

    let deep = quote(
        base_rate,
        commission,
        vec![
            promotion("Flash Sale", PromotionType::Deep, 50.0),
            promotion("Genius Level 2", PromotionType::Genius, 10.0),
        ],
    )?;
    render("Deep deal (suppresses everything else)", &deep);

    Ok(())
}

fn promotion(label: &str, promotion_type: PromotionType, discount: f64) -> PromotionCandidate {
    PromotionCandidate {
        label: label.to_string(),
        promotion_type: Some(promotion_type),
        discount_percentage: discount,
        is_applicable: true,
        is_basic_deal: false,
    }
}

fn quote(
    base_rate: f64,
    commission: f64,
    promotions: Vec<PromotionCandidate>,
) -> Result<RateResult, AppError> {
    let request = RateRequest {
        base_rate: Some(base_rate),
        commission_percentage: Some(commission),
        promotions: Some(promotions),
    };
    let valid = validate(request)?;
    Ok(calculate(&valid)?)
}

fn render(title: &str, result: &RateResult) {
    println!("{title}");
    println!("  base rate:            {:>9.2}", result.base_rate);
    for step in &result.applied_promotions {
        println!(
            "  - {:<18} {:>5.1}%  -{:>7.2}",
            step.label, step.discount_percentage, step.discount_amount
        );
    }
    println!("  final price:          {:>9.2}", result.final_price_to_customer);
    println!(
        "  commission ({:.1}%):   {:>9.2}",
        result.commission_percentage, result.commission_amount
    );
    println!("  net to hotel:         {:>9.2}", result.net_amount_to_hotel);
    println!();
}
