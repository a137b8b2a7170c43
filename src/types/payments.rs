use crate::{prelude::*, types::Extra};

/// A portion of the price for goods or services.
///
/// See also: <https://core.telegram.org/bots/api#labeledprice>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct LabeledPrice {
    pub label: String,

    /// Price in the smallest units of the currency, for example `145` for `US$ 1.45`.
    pub amount: i64,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self { label: label.into(), amount }
    }
}

/// Basic information about an invoice.
///
/// See also: <https://core.telegram.org/bots/api#invoice>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[must_use]
pub struct Invoice {
    pub title: String,
    pub description: String,
    pub start_parameter: String,
    pub currency: String,
    pub total_amount: i64,

    #[serde(flatten)]
    pub extra: Extra,
}

/// See also: <https://core.telegram.org/bots/api#shippingaddress>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShippingAddress {
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

/// See also: <https://core.telegram.org/bots/api#orderinfo>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OrderInfo {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub shipping_address: Option<ShippingAddress>,
}

/// One shipping option.
///
/// See also: <https://core.telegram.org/bots/api#shippingoption>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<LabeledPrice>,
}

/// Basic information about a successful payment.
///
/// See also: <https://core.telegram.org/bots/api#successfulpayment>.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[must_use]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: String,

    #[serde(flatten)]
    pub extra: Extra,
}
