use super::domain::{RateRequest, ValidRate};

/// Why a rate request was refused.
///
/// The validation variants carry the exact messages the booking front end
/// displays to hoteliers; they are part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateError {
    #[error("Invalid input. Please provide baseRate, commissionPercentage, and promotions array.")]
    InvalidInput,
    #[error(
        "Discount percentage must be between 0% and 100%. Please check your promotion settings."
    )]
    DiscountOutOfRange,
    #[error("Commission percentage must be between 0% and 100%.")]
    CommissionOutOfRange,
    #[error("Base rate must be greater than 0.")]
    NonPositiveBaseRate,
    #[error("rate calculation produced a non-finite amount")]
    NonFinite,
}

/// Checks a raw request against the input contract, first failure wins.
///
/// Rule order is observable through the reported message and must not change:
/// presence, promotion discount ranges, commission range, base rate
/// positivity. A zero commission fails the presence rule, not the range rule;
/// that mirrors the contract the front end was built against.
pub fn validate(request: RateRequest) -> Result<ValidRate, RateError> {
    let base_rate = request.base_rate.filter(|rate| *rate != 0.0);
    let commission = request.commission_percentage.filter(|pct| *pct != 0.0);
    let (Some(base_rate), Some(commission_percentage), Some(promotions)) =
        (base_rate, commission, request.promotions)
    else {
        return Err(RateError::InvalidInput);
    };

    let discount_out_of_range = promotions.iter().any(|promo| {
        promo.discount_percentage != 0.0
            && !(0.0..=100.0).contains(&promo.discount_percentage)
    });
    if discount_out_of_range {
        return Err(RateError::DiscountOutOfRange);
    }

    if !(0.0..=100.0).contains(&commission_percentage) {
        return Err(RateError::CommissionOutOfRange);
    }

    if base_rate <= 0.0 {
        return Err(RateError::NonPositiveBaseRate);
    }

    Ok(ValidRate {
        base_rate,
        commission_percentage,
        promotions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::domain::PromotionCandidate;

    fn candidate(discount: f64) -> PromotionCandidate {
        PromotionCandidate {
            label: "Promo".to_string(),
            promotion_type: None,
            discount_percentage: discount,
            is_applicable: true,
            is_basic_deal: false,
        }
    }

    fn request(
        base_rate: Option<f64>,
        commission: Option<f64>,
        promotions: Option<Vec<PromotionCandidate>>,
    ) -> RateRequest {
        RateRequest {
            base_rate,
            commission_percentage: commission,
            promotions,
        }
    }

    #[test]
    fn accepts_well_formed_request_with_empty_promotions() {
        let valid = validate(request(Some(100.0), Some(15.0), Some(Vec::new())))
            .expect("empty promotions are valid");
        assert_eq!(valid.base_rate, 100.0);
        assert_eq!(valid.commission_percentage, 15.0);
        assert!(valid.promotions.is_empty());
    }

    #[test]
    fn missing_fields_fail_the_presence_rule() {
        assert_eq!(
            validate(request(None, Some(15.0), Some(Vec::new()))),
            Err(RateError::InvalidInput)
        );
        assert_eq!(
            validate(request(Some(100.0), None, Some(Vec::new()))),
            Err(RateError::InvalidInput)
        );
        assert_eq!(
            validate(request(Some(100.0), Some(15.0), None)),
            Err(RateError::InvalidInput)
        );
    }

    #[test]
    fn zero_values_fail_presence_before_any_range_rule() {
        assert_eq!(
            validate(request(Some(0.0), Some(15.0), Some(Vec::new()))),
            Err(RateError::InvalidInput)
        );
        assert_eq!(
            validate(request(Some(100.0), Some(0.0), Some(Vec::new()))),
            Err(RateError::InvalidInput)
        );
    }

    #[test]
    fn any_out_of_range_discount_rejects_the_whole_request() {
        let promos = vec![candidate(10.0), candidate(150.0)];
        assert_eq!(
            validate(request(Some(100.0), Some(15.0), Some(promos))),
            Err(RateError::DiscountOutOfRange)
        );
        assert_eq!(
            validate(request(Some(100.0), Some(15.0), Some(vec![candidate(-5.0)]))),
            Err(RateError::DiscountOutOfRange)
        );
    }

    #[test]
    fn discount_range_is_reported_before_commission_range() {
        let result = validate(request(Some(100.0), Some(150.0), Some(vec![candidate(120.0)])));
        assert_eq!(result, Err(RateError::DiscountOutOfRange));
    }

    #[test]
    fn commission_outside_range_is_rejected() {
        assert_eq!(
            validate(request(Some(100.0), Some(150.0), Some(Vec::new()))),
            Err(RateError::CommissionOutOfRange)
        );
        assert_eq!(
            validate(request(Some(100.0), Some(-2.0), Some(Vec::new()))),
            Err(RateError::CommissionOutOfRange)
        );
    }

    #[test]
    fn negative_base_rate_passes_presence_but_fails_positivity() {
        assert_eq!(
            validate(request(Some(-50.0), Some(15.0), Some(Vec::new()))),
            Err(RateError::NonPositiveBaseRate)
        );
    }

    #[test]
    fn zero_discount_candidates_are_not_range_checked() {
        let valid = validate(request(Some(100.0), Some(15.0), Some(vec![candidate(0.0)])))
            .expect("zero-discount candidate is valid");
        assert_eq!(valid.promotions.len(), 1);
    }
}
