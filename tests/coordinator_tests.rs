mod common;

use common::Harness;
use intent_bridge::domain::confirmation::ConfirmationResult;
use intent_bridge::domain::intent::{
    ErrorDetail, IntentKind, IntentSnapshot, IntentStatus, NextActionType,
};
use intent_bridge::domain::outcome::Outcome;
use intent_bridge::domain::request::{AccountContext, ConfirmParams, ConfirmationRequest};
use intent_bridge::infrastructure::in_memory::{ConfirmationCall, HostBehavior};
use intent_bridge::interfaces::bridge::launch_detached;

fn confirm_payment(secret: &str) -> ConfirmationRequest {
    ConfirmationRequest::ConfirmPayment {
        client_secret: secret.to_string(),
        params: ConfirmParams {
            payment_method_id: Some("pm_card_visa".to_string()),
            ..ConfirmParams::default()
        },
    }
}

fn confirm_setup(secret: &str) -> ConfirmationRequest {
    ConfirmationRequest::ConfirmSetup {
        client_secret: secret.to_string(),
        params: ConfirmParams::default(),
    }
}

#[tokio::test]
async fn test_confirmed_payment_succeeds() {
    let snapshot = IntentSnapshot::new(IntentStatus::Succeeded).with_id("pi_1");
    let harness = Harness::new(HostBehavior::Available, ConfirmationResult::Completed)
        .with_intent(IntentKind::Payment, "pi_1_secret", snapshot.clone())
        .await;

    let outcome = harness.coordinator().launch(confirm_payment("pi_1_secret")).await;

    assert_eq!(
        outcome,
        Outcome::Success {
            kind: IntentKind::Payment,
            snapshot
        }
    );
    assert_eq!(harness.fetcher.calls().await.len(), 1);
    assert_eq!(harness.host.attach_calls().await, 1);
    assert_eq!(harness.host.detach_calls().await, 1);
    assert!(!harness.host.is_attached().await);
}

#[tokio::test]
async fn test_setup_waiting_on_redirect_is_canceled() {
    let harness = Harness::new(HostBehavior::Available, ConfirmationResult::Completed)
        .with_intent(
            IntentKind::Setup,
            "seti_1_secret",
            IntentSnapshot::new(IntentStatus::RequiresAction)
                .with_next_action(NextActionType::RedirectToUrl),
        )
        .await;

    let outcome = harness.coordinator().launch(confirm_setup("seti_1_secret")).await;

    match outcome {
        Outcome::Canceled { error: Some(detail) } => {
            let message = detail.message.unwrap_or_default().to_lowercase();
            assert!(message.contains("setup has been canceled"), "{message}");
        }
        other => panic!("expected canceled outcome, got {other:?}"),
    }
    assert_eq!(harness.fetcher.calls().await[0].kind, IntentKind::Setup);
}

#[tokio::test]
async fn test_failed_next_action_skips_fetch() {
    let declined = ErrorDetail {
        code: Some("card_declined".to_string()),
        decline_code: Some("generic_decline".to_string()),
        ..ErrorDetail::from_message("Your card was declined.")
    };
    let harness = Harness::new(
        HostBehavior::Available,
        ConfirmationResult::Failed(declined.clone()),
    );

    let outcome = harness
        .coordinator()
        .launch(ConfirmationRequest::HandleNextAction {
            client_secret: "pi_2_secret".to_string(),
        })
        .await;

    assert_eq!(
        outcome,
        Outcome::Failed {
            error: Some(declined)
        }
    );
    assert!(harness.fetcher.calls().await.is_empty());
    assert_eq!(harness.host.detach_calls().await, 1);
}

#[tokio::test]
async fn test_missing_host_never_confirms() {
    let harness = Harness::new(HostBehavior::Missing, ConfirmationResult::Completed);

    let outcome = harness.coordinator().launch(confirm_payment("pi_3_secret")).await;

    assert_eq!(outcome, Outcome::MissingHost);
    assert!(harness.confirmation.calls().await.is_empty());
    assert!(harness.fetcher.calls().await.is_empty());
    assert_eq!(harness.host.detach_calls().await, 1);
}

#[tokio::test]
async fn test_user_cancel_never_resolves() {
    let harness = Harness::new(HostBehavior::Available, ConfirmationResult::UserCanceled);

    let outcome = harness.coordinator().launch(confirm_setup("seti_4_secret")).await;

    assert_eq!(outcome, Outcome::Canceled { error: None });
    assert!(harness.fetcher.calls().await.is_empty());
}

#[tokio::test]
async fn test_completed_next_action_fetches_payment_intent() {
    let harness = Harness::new(HostBehavior::Available, ConfirmationResult::Completed)
        .with_intent(
            IntentKind::Payment,
            "pi_5_secret",
            IntentSnapshot::new(IntentStatus::RequiresCapture),
        )
        .await;

    let outcome = harness
        .coordinator()
        .launch(ConfirmationRequest::HandleNextAction {
            client_secret: "pi_5_secret".to_string(),
        })
        .await;

    assert!(outcome.is_success());
    assert_eq!(
        harness.confirmation.calls().await,
        vec![ConfirmationCall::HandlePendingAction {
            account: harness.account.clone(),
            client_secret: "pi_5_secret".to_string(),
        }]
    );
    assert_eq!(harness.fetcher.calls().await[0].kind, IntentKind::Payment);
}

#[tokio::test]
async fn test_connected_account_is_forwarded() {
    let mut harness = Harness::new(HostBehavior::Available, ConfirmationResult::Completed)
        .with_intent(
            IntentKind::Payment,
            "pi_6_secret",
            IntentSnapshot::new(IntentStatus::Processing),
        )
        .await;
    harness.account.stripe_account_id = Some("acct_123".to_string());

    harness.coordinator().launch(confirm_payment("pi_6_secret")).await;

    assert_eq!(
        harness.confirmation.calls().await,
        vec![ConfirmationCall::Confirm {
            account: AccountContext {
                publishable_key: "pk_test_harness".to_string(),
                stripe_account_id: Some("acct_123".to_string()),
            },
            kind: IntentKind::Payment,
            client_secret: "pi_6_secret".to_string(),
            params: ConfirmParams {
                payment_method_id: Some("pm_card_visa".to_string()),
                ..ConfirmParams::default()
            },
        }]
    );
    assert_eq!(
        harness.fetcher.calls().await[0].stripe_account_id.as_deref(),
        Some("acct_123")
    );
}

#[tokio::test]
async fn test_setup_params_are_forwarded() {
    let harness = Harness::new(HostBehavior::Available, ConfirmationResult::Completed)
        .with_intent(
            IntentKind::Setup,
            "seti_9_secret",
            IntentSnapshot::new(IntentStatus::Succeeded),
        )
        .await;
    let mut payment_method_data = serde_json::Map::new();
    payment_method_data.insert(
        "billingDetails".to_string(),
        serde_json::json!({"email": "jane@example.com"}),
    );
    let params = ConfirmParams {
        payment_method_id: Some("pm_sepa_debit".to_string()),
        return_url: Some("myapp://stripe-redirect".to_string()),
        payment_method_data,
    };

    let outcome = harness
        .coordinator()
        .launch(ConfirmationRequest::ConfirmSetup {
            client_secret: "seti_9_secret".to_string(),
            params: params.clone(),
        })
        .await;

    assert!(outcome.is_success());
    match harness.confirmation.calls().await.as_slice() {
        [ConfirmationCall::Confirm {
            kind,
            client_secret,
            params: forwarded,
            ..
        }] => {
            assert_eq!(*kind, IntentKind::Setup);
            assert_eq!(client_secret, "seti_9_secret");
            assert_eq!(forwarded.payment_method_id.as_deref(), Some("pm_sepa_debit"));
            assert_eq!(forwarded, &params);
        }
        other => panic!("expected one confirm call, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_intent_reports_fetch_failure() {
    let harness = Harness::new(HostBehavior::Available, ConfirmationResult::Completed);

    let outcome = harness.coordinator().launch(confirm_payment("pi_7_secret")).await;

    match outcome {
        Outcome::Failed { error: Some(detail) } => {
            assert_eq!(detail.code.as_deref(), Some("resource_missing"));
        }
        other => panic!("expected failed outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_launches_are_independent() {
    let succeeded = Harness::new(HostBehavior::Available, ConfirmationResult::Completed)
        .with_intent(
            IntentKind::Payment,
            "pi_8_secret",
            IntentSnapshot::new(IntentStatus::Succeeded),
        )
        .await;
    let canceled = Harness::new(HostBehavior::Available, ConfirmationResult::UserCanceled);

    let first = launch_detached(succeeded.coordinator(), confirm_payment("pi_8_secret"));
    let second = launch_detached(canceled.coordinator(), confirm_setup("seti_8_secret"));

    let (first, second) = tokio::join!(first, second);
    let first = first.unwrap();
    let second = second.unwrap();

    assert_eq!(first["status"], "success");
    assert_eq!(first["intentKind"], "paymentIntent");
    assert_eq!(second["status"], "canceled");
    assert_eq!(succeeded.host.detach_calls().await, 1);
    assert_eq!(canceled.host.detach_calls().await, 1);
}
