//! [Getting updates](https://core.telegram.org/bots/api#getting-updates).

use url::Url;

use crate::{
    Bot,
    method::{Field, FieldKind, Method, Shape},
    prelude::*,
    request::Params,
    types::{Update, WebhookInfo},
};

pub const GET_UPDATES: Method<Vec<Update>> = Method::new(
    "getUpdates",
    Shape::Array,
    &[
        Field::optional("offset", FieldKind::Scalar),
        Field::optional("limit", FieldKind::Scalar),
        Field::optional("timeout", FieldKind::Scalar),
        Field::optional("allowed_updates", FieldKind::Json),
    ],
)
.long_polling();

pub const SET_WEBHOOK: Method<bool> = Method::new(
    "setWebhook",
    Shape::Scalar,
    &[
        Field::required("url", FieldKind::Scalar),
        Field::optional("certificate", FieldKind::File),
        Field::optional("allowed_updates", FieldKind::Json),
    ],
);

pub const DELETE_WEBHOOK: Method<bool> = Method::new(
    "deleteWebhook",
    Shape::Scalar,
    &[Field::optional("drop_pending_updates", FieldKind::Scalar)],
);

pub const GET_WEBHOOK_INFO: Method<WebhookInfo> =
    Method::new("getWebhookInfo", Shape::Object, &[]).query();

impl Bot {
    /// Receive incoming updates using long polling.
    ///
    /// See [`Bot::updates`] for a stream which keeps track of the offset.
    pub async fn get_updates(&self, optional: Params) -> Result<Vec<Update>> {
        self.call(&GET_UPDATES, Params::new(), optional).await
    }

    /// Use `optional` for the `secret_token`, `certificate` upload, `allowed_updates` and so on.
    pub async fn set_webhook(&self, url: &Url, optional: Params) -> Result<bool> {
        self.call(&SET_WEBHOOK, Params::new().with("url", url.as_str()), optional).await
    }

    pub async fn delete_webhook(&self, optional: Params) -> Result<bool> {
        self.call(&DELETE_WEBHOOK, Params::new(), optional).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo> {
        self.call(&GET_WEBHOOK_INFO, Params::new(), Params::new()).await
    }
}
