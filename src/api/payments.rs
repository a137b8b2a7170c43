//! [Payments](https://core.telegram.org/bots/api#payments).

use bon::Builder;

use crate::{
    Bot,
    method::{CHAT_ID, Field, FieldKind, Method, REPLY_MARKUP, REPLY_PARAMETERS, Shape},
    prelude::*,
    request::Params,
    types::{ChatId, LabeledPrice, Message, ShippingOption},
};

/// Required parameters shared by `sendInvoice` and `createInvoiceLink`.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct InvoiceParams {
    #[builder(into)]
    pub title: String,

    #[builder(into)]
    pub description: String,

    /// Bot-defined payload, not displayed to the user.
    #[builder(into)]
    pub payload: String,

    /// Three-letter ISO 4217 currency code, or `XTR` for Telegram Stars.
    #[builder(into)]
    pub currency: String,

    pub prices: Vec<LabeledPrice>,
}

impl InvoiceParams {
    fn into_params(self, params: Params) -> Result<Params> {
        params
            .with("title", self.title)
            .with("description", self.description)
            .with("payload", self.payload)
            .with("currency", self.currency)
            .with_serialized("prices", &self.prices)
    }
}

const INVOICE_FIELDS: [Field; 5] = [
    Field::required("title", FieldKind::Scalar),
    Field::required("description", FieldKind::Scalar),
    Field::required("payload", FieldKind::Scalar),
    Field::required("currency", FieldKind::Scalar),
    Field::required("prices", FieldKind::Json),
];

pub const SEND_INVOICE: Method<Message> = Method::new(
    "sendInvoice",
    Shape::Object,
    &[
        CHAT_ID,
        INVOICE_FIELDS[0],
        INVOICE_FIELDS[1],
        INVOICE_FIELDS[2],
        INVOICE_FIELDS[3],
        INVOICE_FIELDS[4],
        Field::optional("suggested_tip_amounts", FieldKind::Json),
        REPLY_PARAMETERS,
        REPLY_MARKUP,
    ],
);

pub const CREATE_INVOICE_LINK: Method<String> =
    Method::new("createInvoiceLink", Shape::Scalar, &INVOICE_FIELDS);

pub const ANSWER_SHIPPING_QUERY: Method<bool> = Method::new(
    "answerShippingQuery",
    Shape::Scalar,
    &[
        Field::required("shipping_query_id", FieldKind::Scalar),
        Field::required("ok", FieldKind::Scalar),
        Field::optional("shipping_options", FieldKind::Json),
    ],
);

pub const ANSWER_PRE_CHECKOUT_QUERY: Method<bool> = Method::new(
    "answerPreCheckoutQuery",
    Shape::Scalar,
    &[
        Field::required("pre_checkout_query_id", FieldKind::Scalar),
        Field::required("ok", FieldKind::Scalar),
    ],
);

impl Bot {
    pub async fn send_invoice(
        &self,
        chat_id: impl Into<ChatId>,
        invoice: InvoiceParams,
        optional: Params,
    ) -> Result<Message> {
        let required = invoice.into_params(Params::new().with("chat_id", chat_id.into()))?;
        self.call(&SEND_INVOICE, required, optional).await
    }

    pub async fn create_invoice_link(
        &self,
        invoice: InvoiceParams,
        optional: Params,
    ) -> Result<String> {
        self.call(&CREATE_INVOICE_LINK, invoice.into_params(Params::new())?, optional).await
    }

    /// Reply to a shipping query: `Ok` with the shipping options, or `Err` with the reason.
    pub async fn answer_shipping_query(
        &self,
        shipping_query_id: impl Into<String>,
        answer: Result<&[ShippingOption], &str>,
    ) -> Result<bool> {
        let required = Params::new().with("shipping_query_id", shipping_query_id.into());
        let required = match answer {
            Ok(options) => required.with("ok", true).with_serialized("shipping_options", options)?,
            Err(error_message) => required.with("ok", false).with("error_message", error_message),
        };
        self.call(&ANSWER_SHIPPING_QUERY, required, Params::new()).await
    }

    /// Confirm the order with `Ok`, or reject it with the error message shown to the user.
    pub async fn answer_pre_checkout_query(
        &self,
        pre_checkout_query_id: impl Into<String>,
        answer: Result<(), &str>,
    ) -> Result<bool> {
        let required = Params::new().with("pre_checkout_query_id", pre_checkout_query_id.into());
        let required = match answer {
            Ok(()) => required.with("ok", true),
            Err(error_message) => required.with("ok", false).with("error_message", error_message),
        };
        self.call(&ANSWER_PRE_CHECKOUT_QUERY, required, Params::new()).await
    }
}
