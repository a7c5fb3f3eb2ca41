#[cfg(test)]
mod api_tests {
    use crate::client_mock::{setup_mock_client, MockSchedulerClient};
    use crate::error::{ErrorKind, WorkflowError};
    use crate::handlers::api::Assistant;
    use crate::models::booking::BookingStatus;
    use crate::services::booking::BookingOutcome;
    use crate::services::search::SearchOutcome;
    use crate::services::slot_parser::TextSlotParser;
    use crate::tests::common::fixtures::TWO_SLOT_BODY;

    const AUTHORIZE_URL: &str = "http://localhost:8080/authorize";

    // Helper function to set up an assistant over a mock backend
    fn setup_assistant(body: &str) -> Assistant<MockSchedulerClient> {
        let (mock_client, _) = setup_mock_client(body);
        Assistant::new(mock_client, TextSlotParser::default(), AUTHORIZE_URL)
    }

    #[tokio::test]
    async fn test_search_replaces_cards() {
        let mut assistant = setup_assistant(TWO_SLOT_BODY);
        assert!(assistant.cards().is_empty());

        let outcome = assistant.search("next week").await;
        assert!(matches!(outcome, SearchOutcome::Slots(_)));
        assert_eq!(assistant.cards().len(), 2);
        assert_eq!(assistant.authorize_url(), AUTHORIZE_URL);
    }

    #[tokio::test]
    async fn test_rejected_prompt_keeps_previous_cards() {
        let mut assistant = setup_assistant(TWO_SLOT_BODY);
        assistant.search("next week").await;

        let outcome = assistant.search("  ").await;
        assert_eq!(outcome, SearchOutcome::Rejected);
        assert_eq!(assistant.cards().len(), 2);
    }

    #[tokio::test]
    async fn test_new_search_closes_open_modal() {
        let mut assistant = setup_assistant(TWO_SLOT_BODY);
        assistant.search("next week").await;
        assistant.book(1).unwrap();
        assert_eq!(assistant.booking_state().status, BookingStatus::ModalOpen);

        assistant.search("next month").await;
        assert_eq!(assistant.booking_state().status, BookingStatus::Idle);
        assert!(assistant.booking_state().active_slot.is_none());
    }

    #[tokio::test]
    async fn test_book_unknown_card() {
        let mut assistant = setup_assistant(TWO_SLOT_BODY);
        assert_eq!(assistant.book(1).unwrap_err(), WorkflowError::UnknownCard(1));
    }

    #[tokio::test]
    async fn test_booking_twice_is_refused() {
        let mut assistant = setup_assistant(TWO_SLOT_BODY);
        assistant.search("next week").await;

        assistant.book(2).unwrap();
        let outcome = assistant.submit("Retro", "a@x.com").await;
        assert!(matches!(outcome, BookingOutcome::Booked { card_index: 2, .. }));

        assert_eq!(assistant.book(2).unwrap_err(), WorkflowError::AlreadyBooked(2));
        // The other card is still bookable
        assert!(assistant.book(1).is_ok());
    }

    #[tokio::test]
    async fn test_failed_search_clears_cards() {
        let mut mock_client = MockSchedulerClient::new();
        let mut seq = mockall::Sequence::new();
        mock_client
            .expect_find_free_slots()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(TWO_SLOT_BODY.to_string()));
        mock_client
            .expect_find_free_slots()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(crate::error::ApiError::Unauthorized));

        let mut assistant = Assistant::new(mock_client, TextSlotParser::default(), AUTHORIZE_URL);
        assistant.search("next week").await;
        assert_eq!(assistant.cards().len(), 2);

        let outcome = assistant.search("next week").await;
        assert_eq!(outcome, SearchOutcome::Failed(ErrorKind::Unauthorized));
        assert!(assistant.cards().is_empty());
    }
}
