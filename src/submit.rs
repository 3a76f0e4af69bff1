//! Form Submission Pipeline
//!
//! Validated form -> one POST -> status branch -> what the page should do:
//! which message panel to show, whether to reset the form, whether to
//! redirect. Components apply the outcome; nothing here touches the DOM.

use std::time::Duration;

use crate::api::{self, ApiResult, Transport};
use crate::config::ClientConfig;
use crate::form::{self, FormFields, RegistrationError};
use crate::validation::format_validation_errors;

pub const NETWORK_FAILURE_TEXT: &str = "サーバーとの通信に失敗しました。ネットワークを確認してください。";
pub const PASSWORD_MISMATCH_TEXT: &str = "パスワードが一致しません。";
pub const REQUIRED_FIELD_TEXT: &str = "入力してください";

/// Contents of the message area after a submission
#[derive(Debug, Clone, PartialEq)]
pub enum MessagePanel {
    Success(String),
    /// Heading plus one line per rejected field
    Invalid { heading: String, lines: Vec<String> },
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub to: String,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub panel: MessagePanel,
    pub reset_form: bool,
    pub redirect: Option<Redirect>,
}

impl SubmissionOutcome {
    fn panel(panel: MessagePanel) -> Self {
        Self { panel, reset_form: false, redirect: None }
    }
}

/// Per-form wording of each branch
struct FormTexts {
    success: &'static str,
    invalid_heading: &'static str,
    error_prefix: &'static str,
}

const RECORD_TEXTS: FormTexts = FormTexts {
    success: "✅ 記録が完了しました！",
    invalid_heading: "入力データに問題があります:",
    error_prefix: "エラーが発生しました",
};

const REGISTER_TEXTS: FormTexts = FormTexts {
    success: "✅ 登録が完了しました！ログイン画面へ移動します。",
    invalid_heading: "入力エラー:",
    error_prefix: "登録中にエラーが発生しました",
};

fn outcome_from_result(result: ApiResult<()>, texts: &FormTexts) -> SubmissionOutcome {
    match result {
        ApiResult::Success(_) => SubmissionOutcome {
            panel: MessagePanel::Success(texts.success.to_string()),
            reset_form: true,
            redirect: None,
        },
        ApiResult::ValidationError(details) => SubmissionOutcome::panel(MessagePanel::Invalid {
            heading: texts.invalid_heading.to_string(),
            lines: format_validation_errors(&details),
        }),
        ApiResult::ServerError(message) => {
            SubmissionOutcome::panel(MessagePanel::Error(format!("{}: {}", texts.error_prefix, message)))
        }
        ApiResult::NetworkError(_) => SubmissionOutcome::panel(MessagePanel::Error(NETWORK_FAILURE_TEXT.to_string())),
    }
}

/// Required fields that are blank, as an invalid panel (no request made)
fn missing_fields_outcome(missing: &[String], texts: &FormTexts) -> SubmissionOutcome {
    SubmissionOutcome::panel(MessagePanel::Invalid {
        heading: texts.invalid_heading.to_string(),
        lines: missing
            .iter()
            .map(|name| format!("[{}]: {}", name, REQUIRED_FIELD_TEXT))
            .collect(),
    })
}

/// Submit the loss record form
pub async fn submit_loss_record(
    fields: &FormFields,
    transport: &dyn Transport,
    config: &ClientConfig,
) -> SubmissionOutcome {
    let missing = fields.missing(form::LOSS_RECORD_FIELDS);
    if !missing.is_empty() {
        tracing::info!(?missing, "loss record not sent");
        return missing_fields_outcome(&missing, &RECORD_TEXTS);
    }

    let payload = form::loss_record_payload(fields, config.placeholder_user_id);
    tracing::info!(item = %payload.item_name, "submitting loss record");
    let outcome = outcome_from_result(api::add_loss_record(transport, &payload).await, &RECORD_TEXTS);
    tracing::debug!(reset = outcome.reset_form, "loss record submission finished");
    outcome
}

/// Submit the registration form; a password mismatch never reaches the network
pub async fn submit_registration(
    fields: &FormFields,
    transport: &dyn Transport,
    config: &ClientConfig,
) -> SubmissionOutcome {
    let payload = match form::registration_payload(fields) {
        Ok(payload) => payload,
        Err(RegistrationError::PasswordMismatch) => {
            tracing::info!("registration rejected: passwords differ");
            return SubmissionOutcome::panel(MessagePanel::Error(PASSWORD_MISMATCH_TEXT.to_string()));
        }
    };

    let missing = fields.missing(&["username", "email", "password"]);
    if !missing.is_empty() {
        tracing::info!(?missing, "registration not sent");
        return missing_fields_outcome(&missing, &REGISTER_TEXTS);
    }

    tracing::info!("submitting registration");
    let mut outcome = outcome_from_result(api::register_user(transport, &payload).await, &REGISTER_TEXTS);
    if outcome.reset_form {
        outcome.redirect = Some(Redirect { to: config.redirect_target.clone(), after: config.redirect_delay });
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use crate::api::Method;
    use crate::error::TransportError;
    use crate::validation::UNKNOWN_FIELD;
    use serde_json::json;

    fn record_fields() -> FormFields {
        FormFields::new()
            .with("item_name", "rice")
            .with("weight_grams", "150.5")
            .with("reason_text", "overcooked")
    }

    fn registration_fields(password: &str, confirm: &str) -> FormFields {
        FormFields::new()
            .with("username", "hana")
            .with("email", "hana@example.com")
            .with("password", password)
            .with("password_confirm", confirm)
    }

    #[tokio::test]
    async fn test_record_payload_sends_numeric_weight() {
        let transport = MockTransport::new().respond(201, r#"{"message": "記録完了！", "record_id": 9}"#);
        submit_loss_record(&record_fields(), &transport, &ClientConfig::default()).await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/api/add_loss_record");
        assert_eq!(
            sent[0].body,
            Some(json!({
                "user_id": 1,
                "item_name": "rice",
                "weight_grams": 150.5,
                "reason_text": "overcooked"
            }))
        );
    }

    #[tokio::test]
    async fn test_record_success_resets_and_shows_message_once() {
        let transport = MockTransport::new().respond(201, "{}");
        let outcome = submit_loss_record(&record_fields(), &transport, &ClientConfig::default()).await;
        assert!(outcome.reset_form);
        assert_eq!(outcome.panel, MessagePanel::Success(RECORD_TEXTS.success.to_string()));
        assert_eq!(outcome.redirect, None);
    }

    #[tokio::test]
    async fn test_record_success_with_plain_text_body() {
        let transport = MockTransport::new().respond(200, "OK");
        let outcome = submit_loss_record(&record_fields(), &transport, &ClientConfig::default()).await;
        assert!(outcome.reset_form);
        assert_eq!(outcome.panel, MessagePanel::Success(RECORD_TEXTS.success.to_string()));
    }

    #[tokio::test]
    async fn test_registration_success_with_html_body_still_redirects() {
        let transport = MockTransport::new().respond(201, "<html>created</html>");
        let outcome = submit_registration(&registration_fields("pw", "pw"), &transport, &ClientConfig::default()).await;
        assert!(outcome.reset_form);
        assert!(outcome.redirect.is_some());
    }

    #[tokio::test]
    async fn test_record_validation_error_with_float_location_keeps_all_lines() {
        let body = r#"{"details": [
            {"loc": ["weight_grams", 1.5], "msg": "bad"},
            {"loc": ["reason_text"], "msg": "invalid reason"}
        ]}"#;
        let transport = MockTransport::new().respond(422, body);
        let outcome = submit_loss_record(&record_fields(), &transport, &ClientConfig::default()).await;
        assert!(matches!(outcome.panel, MessagePanel::Invalid { ref lines, .. } if lines.len() == 2));
    }

    #[tokio::test]
    async fn test_record_validation_error_lists_every_detail() {
        let body = r#"{"message": "入力データが無効です", "details": [
            {"loc": ["weight_grams"], "msg": "Input should be greater than 0"},
            {"msg": "Invalid loss reason"}
        ]}"#;
        let transport = MockTransport::new().respond(422, body);
        let outcome = submit_loss_record(&record_fields(), &transport, &ClientConfig::default()).await;

        assert!(!outcome.reset_form);
        assert_eq!(
            outcome.panel,
            MessagePanel::Invalid {
                heading: RECORD_TEXTS.invalid_heading.to_string(),
                lines: vec![
                    "[weight_grams]: Input should be greater than 0".to_string(),
                    format!("[{}]: Invalid loss reason", UNKNOWN_FIELD),
                ],
            }
        );
    }

    #[tokio::test]
    async fn test_record_server_error_shows_message() {
        let transport = MockTransport::new().respond(401, r#"{"message": "認証が必要です。"}"#);
        let outcome = submit_loss_record(&record_fields(), &transport, &ClientConfig::default()).await;
        assert_eq!(outcome.panel, MessagePanel::Error("エラーが発生しました: 認証が必要です。".to_string()));
    }

    #[tokio::test]
    async fn test_record_network_failure_fixed_message_no_retry() {
        let transport = MockTransport::new().fail(TransportError::Network("Failed to fetch".into()));
        let outcome = submit_loss_record(&record_fields(), &transport, &ClientConfig::default()).await;
        assert_eq!(outcome.panel, MessagePanel::Error(NETWORK_FAILURE_TEXT.to_string()));
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_unparsable_weight_is_left_to_server() {
        let fields = record_fields().with("weight_grams", "lots");
        let transport = MockTransport::new().respond(422, r#"{"details": []}"#);
        submit_loss_record(&fields, &transport, &ClientConfig::default()).await;
        let body = transport.sent()[0].body.clone().unwrap();
        assert!(body["weight_grams"].is_null());
    }

    #[tokio::test]
    async fn test_record_missing_reason_not_sent() {
        let fields = FormFields::new().with("item_name", "rice").with("weight_grams", "10");
        let transport = MockTransport::new();
        let outcome = submit_loss_record(&fields, &transport, &ClientConfig::default()).await;
        assert!(transport.sent().is_empty());
        assert!(matches!(outcome.panel, MessagePanel::Invalid { ref lines, .. } if lines.len() == 1));
    }

    #[tokio::test]
    async fn test_registration_mismatch_makes_no_request() {
        let transport = MockTransport::new();
        let outcome = submit_registration(&registration_fields("a", "b"), &transport, &ClientConfig::default()).await;
        assert!(transport.sent().is_empty());
        assert_eq!(outcome.panel, MessagePanel::Error(PASSWORD_MISMATCH_TEXT.to_string()));
        assert!(!outcome.reset_form);
    }

    #[tokio::test]
    async fn test_registration_success_schedules_redirect() {
        let transport = MockTransport::new().respond(201, r#"{"message": "登録完了！", "user_id": 3}"#);
        let config = ClientConfig::default();
        let outcome = submit_registration(&registration_fields("pw", "pw"), &transport, &config).await;

        assert!(outcome.reset_form);
        assert_eq!(
            outcome.redirect,
            Some(Redirect { to: "/".to_string(), after: Duration::from_secs(3) })
        );
        let body = transport.sent()[0].body.clone().unwrap();
        assert_eq!(body, json!({"username": "hana", "email": "hana@example.com", "password": "pw"}));
    }

    #[tokio::test]
    async fn test_registration_failure_does_not_redirect() {
        let transport = MockTransport::new().respond(500, r#"{"message": "登録エラー: duplicate"}"#);
        let outcome = submit_registration(&registration_fields("pw", "pw"), &transport, &ClientConfig::default()).await;
        assert_eq!(outcome.redirect, None);
        assert_eq!(
            outcome.panel,
            MessagePanel::Error("登録中にエラーが発生しました: 登録エラー: duplicate".to_string())
        );
    }
}
