use serde::{Deserialize, Serialize};

/// Discount categories recognized by the stacking policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionType {
    Basic,
    Campaign,
    Deep,
    Genius,
    Target,
}

impl PromotionType {
    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(Self::Basic),
            "campaign" => Some(Self::Campaign),
            "deep" => Some(Self::Deep),
            "genius" => Some(Self::Genius),
            "target" => Some(Self::Target),
            _ => None,
        }
    }
}

/// One candidate discount as submitted by the booking front end.
///
/// Input order is caller-significant: when several candidates share a type,
/// the engine considers only the first one encountered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionCandidate {
    #[serde(default)]
    pub label: String,
    /// An unrecognized or missing type string leaves the candidate eligible
    /// for no slot; it is not a request error.
    #[serde(
        default,
        rename = "type",
        deserialize_with = "deserialize_promotion_type"
    )]
    pub promotion_type: Option<PromotionType>,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub is_applicable: bool,
    /// Alternate marker for the basic slot, equivalent to `type == "basic"`.
    #[serde(default)]
    pub is_basic_deal: bool,
}

fn deserialize_promotion_type<'de, D>(deserializer: D) -> Result<Option<PromotionType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PromotionType::from_wire))
}

/// Raw request body for the calculate endpoint.
///
/// Presence and numeric ranges are resolved by the validator rather than by
/// serde so that every shape failure reports the same contract message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub base_rate: Option<f64>,
    pub commission_percentage: Option<f64>,
    pub promotions: Option<Vec<PromotionCandidate>>,
}

/// A request that passed every validation rule, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRate {
    pub base_rate: f64,
    pub commission_percentage: f64,
    pub promotions: Vec<PromotionCandidate>,
}

/// One discount step actually taken, in application order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppliedPromotion {
    pub label: String,
    pub discount_percentage: f64,
    /// Currency amount removed by this step, rounded to cents for reporting.
    pub discount_amount: f64,
}

/// Final price breakdown returned to the booking front end.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateResult {
    pub base_rate: f64,
    pub final_price_to_customer: f64,
    pub total_discount_amount: f64,
    /// Total discount expressed as a percentage of the base rate.
    pub total_discount_percentage: f64,
    pub commission_percentage: f64,
    pub commission_amount: f64,
    pub net_amount_to_hotel: f64,
    pub applied_promotions: Vec<AppliedPromotion>,
}
