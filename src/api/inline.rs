//! [Inline mode](https://core.telegram.org/bots/api#inline-mode) and callback queries.

use crate::{
    Bot,
    method::{Field, FieldKind, Method, Shape},
    prelude::*,
    request::Params,
    types::{InlineQueryResult, SentWebAppMessage},
};

const RESULT: Field = Field::required("result", FieldKind::Json);

pub const ANSWER_INLINE_QUERY: Method<bool> = Method::new(
    "answerInlineQuery",
    Shape::Scalar,
    &[
        Field::required("inline_query_id", FieldKind::Scalar),
        Field::required("results", FieldKind::Json),
        Field::optional("button", FieldKind::Json),
    ],
);

pub const ANSWER_CALLBACK_QUERY: Method<bool> = Method::new(
    "answerCallbackQuery",
    Shape::Scalar,
    &[Field::required("callback_query_id", FieldKind::Scalar)],
);

pub const ANSWER_WEB_APP_QUERY: Method<SentWebAppMessage> = Method::new(
    "answerWebAppQuery",
    Shape::Object,
    &[Field::required("web_app_query_id", FieldKind::Scalar), RESULT],
);

impl Bot {
    /// Use `optional` for `cache_time`, `is_personal`, `next_offset` and `button`.
    pub async fn answer_inline_query(
        &self,
        inline_query_id: impl Into<String>,
        results: &[InlineQueryResult],
        optional: Params,
    ) -> Result<bool> {
        let required = Params::new()
            .with("inline_query_id", inline_query_id.into())
            .with_serialized("results", results)?;
        self.call(&ANSWER_INLINE_QUERY, required, optional).await
    }

    /// Stop the loading animation on the user's button, optionally showing a notification.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: impl Into<String>,
        optional: Params,
    ) -> Result<bool> {
        let required = Params::new().with("callback_query_id", callback_query_id.into());
        self.call(&ANSWER_CALLBACK_QUERY, required, optional).await
    }

    pub async fn answer_web_app_query(
        &self,
        web_app_query_id: impl Into<String>,
        result: &InlineQueryResult,
    ) -> Result<SentWebAppMessage> {
        let required = Params::new()
            .with("web_app_query_id", web_app_query_id.into())
            .with_serialized("result", result)?;
        self.call(&ANSWER_WEB_APP_QUERY, required, Params::new()).await
    }
}
