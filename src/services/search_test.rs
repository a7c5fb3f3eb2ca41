#[cfg(test)]
mod search_tests {
    use crate::client_mock::{setup_mock_client, MockSchedulerClient};
    use crate::error::{ApiError, ErrorKind, MSG_EMPTY_PROMPT, MSG_NETWORK, MSG_NO_SLOTS, MSG_UNAUTHORIZED};
    use crate::models::common::OperationStatus;
    use crate::services::search::{SearchController, SearchOutcome};
    use crate::services::slot_parser::{TextSlotParser, NO_RESULTS_SENTINEL};
    use crate::tests::common::fixtures::{ONE_SLOT_BODY, TWO_SLOT_BODY};

    fn failing_client(err: ApiError) -> MockSchedulerClient {
        let mut mock_client = MockSchedulerClient::new();
        mock_client
            .expect_find_free_slots()
            .times(1)
            .returning(move |_| Err(err.clone()));
        mock_client
    }

    #[tokio::test]
    async fn test_blank_prompt_is_rejected_locally() {
        let mut mock_client = MockSchedulerClient::new();
        mock_client.expect_find_free_slots().never();

        let mut controller = SearchController::new(TextSlotParser::default());
        let outcome = controller.search(&mock_client, "   ").await;

        assert_eq!(outcome, SearchOutcome::Rejected);
        assert_eq!(controller.state().message.as_deref(), Some(MSG_EMPTY_PROMPT));
        assert!(controller.state().search_enabled());
        assert!(!controller.state().loading());
    }

    #[tokio::test]
    async fn test_prompt_is_trimmed_before_sending() {
        let mut mock_client = MockSchedulerClient::new();
        mock_client
            .expect_find_free_slots()
            .withf(|prompt: &str| prompt == "30 minutes tomorrow")
            .times(1)
            .returning(|_| Ok(ONE_SLOT_BODY.to_string()));

        let mut controller = SearchController::new(TextSlotParser::default());
        let outcome = controller.search(&mock_client, "  30 minutes tomorrow \n").await;
        assert!(matches!(outcome, SearchOutcome::Slots(ref cards) if cards.len() == 1));
    }

    #[tokio::test]
    async fn test_slots_are_rendered_in_order() {
        let (mock_client, _) = setup_mock_client(TWO_SLOT_BODY);
        let mut controller = SearchController::new(TextSlotParser::default());

        let outcome = controller.search(&mock_client, "next week").await;
        let SearchOutcome::Slots(cards) = outcome else {
            panic!("expected slots");
        };

        let indices: Vec<usize> = cards.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(cards[0].date_label, "Mon Jan 6");
        assert_eq!(cards[1].date_label, "Tue Jan 7");

        assert_eq!(controller.state().status, OperationStatus::Done);
        assert!(controller.state().message.is_none());
        assert!(controller.state().search_enabled());
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock_client = failing_client(ApiError::Unauthorized);
        let mut controller = SearchController::new(TextSlotParser::default());

        let outcome = controller.search(&mock_client, "tomorrow").await;

        assert_eq!(outcome, SearchOutcome::Failed(ErrorKind::Unauthorized));
        assert_eq!(controller.state().message.as_deref(), Some(MSG_UNAUTHORIZED));
        assert!(!controller.state().loading());
        assert!(controller.state().search_enabled());
    }

    #[tokio::test]
    async fn test_empty_body_sentinel_and_unparsable_all_mean_no_slots() {
        for body in ["", "  \n", NO_RESULTS_SENTINEL, "Slot 1\nbroken"] {
            let (mock_client, _) = setup_mock_client(body);
            let mut controller = SearchController::new(TextSlotParser::default());

            let outcome = controller.search(&mock_client, "tomorrow").await;
            assert_eq!(outcome, SearchOutcome::Failed(ErrorKind::NoResults), "body {:?}", body);
            assert_eq!(controller.state().message.as_deref(), Some(MSG_NO_SLOTS));
            assert!(controller.state().search_enabled());
        }
    }

    #[tokio::test]
    async fn test_network_failure_has_its_own_message() {
        for err in [ApiError::Timeout, ApiError::Network("connection reset".to_string())] {
            let mock_client = failing_client(err);
            let mut controller = SearchController::new(TextSlotParser::default());

            let outcome = controller.search(&mock_client, "tomorrow").await;
            assert_eq!(outcome, SearchOutcome::Failed(ErrorKind::NetworkFailure));

            let message = controller.state().message.clone().unwrap();
            assert_eq!(message, MSG_NETWORK);
            assert_ne!(message, MSG_UNAUTHORIZED);
            assert_ne!(message, MSG_NO_SLOTS);
            assert_eq!(
                controller.state().status,
                OperationStatus::Retryable(ErrorKind::NetworkFailure)
            );
        }
    }

    #[tokio::test]
    async fn test_server_error_is_malformed_response() {
        let mock_client = failing_client(ApiError::UnexpectedStatus {
            status: 500,
            body: "Internal Server Error".to_string(),
        });
        let mut controller = SearchController::new(TextSlotParser::default());

        let outcome = controller.search(&mock_client, "tomorrow").await;
        assert_eq!(outcome, SearchOutcome::Failed(ErrorKind::MalformedResponse));
        assert!(controller.state().search_enabled());
    }

    #[tokio::test]
    async fn test_custom_sentinel_parser() {
        let (mock_client, _) = setup_mock_client("Nothing free.");
        let mut controller = SearchController::new(TextSlotParser::new("Nothing free."));

        let outcome = controller.search(&mock_client, "tomorrow").await;
        assert_eq!(outcome, SearchOutcome::Failed(ErrorKind::NoResults));
    }
}
