use super::domain::{AppliedPromotion, PromotionCandidate, PromotionType, RateResult, ValidRate};
use super::validation::RateError;

/// Rounds to cents for reporting. Intermediate prices keep full precision;
/// rounding happens only at the points the output contract names, so reported
/// step amounts may not sum exactly to the reported total after compounding.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn apply_step(
    promo: &PromotionCandidate,
    current_price: &mut f64,
    total_discount: &mut f64,
    applied: &mut Vec<AppliedPromotion>,
) {
    let discount = *current_price * (promo.discount_percentage / 100.0);
    *current_price -= discount;
    *total_discount += discount;
    applied.push(AppliedPromotion {
        label: promo.label.clone(),
        discount_percentage: promo.discount_percentage,
        discount_amount: round2(discount),
    });
}

/// Derives the full price breakdown for a validated request.
///
/// Stacking policy: a deep deal suppresses everything else; otherwise the base
/// slot goes to campaign over basic, target stacks only on basic without a
/// campaign present, and genius stacks last in every combination.
pub fn calculate(request: &ValidRate) -> Result<RateResult, RateError> {
    let applicable: Vec<&PromotionCandidate> = request
        .promotions
        .iter()
        .filter(|promo| promo.is_applicable && promo.discount_percentage > 0.0)
        .collect();

    // First match per slot, in input order.
    let basic_deal = applicable
        .iter()
        .copied()
        .find(|promo| promo.is_basic_deal || promo.promotion_type == Some(PromotionType::Basic));
    let campaign_deal = find_typed(&applicable, PromotionType::Campaign);
    let deep_deal = find_typed(&applicable, PromotionType::Deep);
    let genius_promo = find_typed(&applicable, PromotionType::Genius);
    let target_promo = find_typed(&applicable, PromotionType::Target);

    let mut current_price = request.base_rate;
    let mut total_discount = 0.0_f64;
    let mut applied = Vec::new();

    if let Some(deep) = deep_deal {
        // Deep deals never stack with any other promotion type.
        apply_step(deep, &mut current_price, &mut total_discount, &mut applied);
    } else {
        // Campaign outranks basic for the base-deal slot; the loser is
        // dropped, not stacked.
        if let Some(base_deal) = campaign_deal.or(basic_deal) {
            apply_step(base_deal, &mut current_price, &mut total_discount, &mut applied);
        }

        // Target stacks on basic only, never alongside a campaign.
        if let (Some(target), Some(_), None) = (target_promo, basic_deal, campaign_deal) {
            apply_step(target, &mut current_price, &mut total_discount, &mut applied);
        }

        if let Some(genius) = genius_promo {
            apply_step(genius, &mut current_price, &mut total_discount, &mut applied);
        }
    }

    let final_price_to_customer = round2(current_price);
    // Commission is charged on what the customer actually pays, not the base
    // rate.
    let commission_amount = round2(final_price_to_customer * (request.commission_percentage / 100.0));
    let net_amount_to_hotel = round2(final_price_to_customer - commission_amount);
    let total_discount_percentage = round2(total_discount / request.base_rate * 100.0);

    let result = RateResult {
        base_rate: request.base_rate,
        final_price_to_customer,
        total_discount_amount: round2(total_discount),
        total_discount_percentage,
        commission_percentage: request.commission_percentage,
        commission_amount,
        net_amount_to_hotel,
        applied_promotions: applied,
    };

    if !result.final_price_to_customer.is_finite()
        || !result.total_discount_amount.is_finite()
        || !result.commission_amount.is_finite()
        || !result.net_amount_to_hotel.is_finite()
    {
        return Err(RateError::NonFinite);
    }

    Ok(result)
}

fn find_typed<'a>(
    applicable: &[&'a PromotionCandidate],
    wanted: PromotionType,
) -> Option<&'a PromotionCandidate> {
    applicable
        .iter()
        .copied()
        .find(|promo| promo.promotion_type == Some(wanted))
}
