//! Facade integration tests over stub transports.
//!
//! These tests verify the contract of the three public operations
//! without touching the network.

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use nlquery_rs::types::Context;
    use nlquery_rs::{NlqClient, QueryRequest};
    use serde_json::Value;

    use crate::common::fixtures;
    use crate::common::RecordingTransport;

    fn client_over(transport: Arc<RecordingTransport>) -> NlqClient {
        NlqClient::with_transport(fixtures::config(), transport)
    }

    // ==================== Text path ====================

    #[tokio::test]
    async fn test_missing_query_never_reaches_the_transport() {
        let transport = Arc::new(RecordingTransport::replying(fixtures::success_body()));
        let client = client_over(transport.clone());

        let err = client.text_query(QueryRequest::default()).await.unwrap_err();
        assert!(err.is_invalid_argument());

        let err = client.text_query(QueryRequest::new("")).await.unwrap_err();
        assert!(err.is_invalid_argument());

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_reply_is_a_service_error() {
        let transport = Arc::new(RecordingTransport::replying(""));
        let client = client_over(transport);

        let err = client.text_query(QueryRequest::new("hello")).await.unwrap_err();
        assert!(err.is_service());
    }

    #[tokio::test]
    async fn test_malformed_reply_is_a_decode_error() {
        let transport = Arc::new(RecordingTransport::replying("not-json"));
        let client = client_over(transport);

        let err = client.text_query(QueryRequest::new("hello")).await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_request_is_stamped_before_sending() {
        let transport = Arc::new(RecordingTransport::replying(fixtures::success_body()));
        let client = client_over(transport.clone()).with_timezone("Europe/Paris");

        let request = QueryRequest {
            query: Some("hello".to_string()),
            session_id: Some("caller-session".to_string()),
            lang: Some("xx".to_string()),
            ..QueryRequest::default()
        };
        client.text_query(request).await.unwrap();

        let sent = transport.sent_text.lock().unwrap();
        let body: Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(body["query"], "hello");
        assert_eq!(body["lang"], "en");
        assert_eq!(body["sessionId"], client.session_id());
        assert_eq!(body["timezone"], "Europe/Paris");
    }

    #[tokio::test]
    async fn test_session_id_is_identical_across_calls() {
        let transport = Arc::new(RecordingTransport::replying(fixtures::success_body()));
        let client = client_over(transport.clone());

        client.text_query(QueryRequest::new("first")).await.unwrap();
        client.text_query(QueryRequest::new("second")).await.unwrap();

        let sent = transport.sent_text.lock().unwrap();
        let first: Value = serde_json::from_str(&sent[0]).unwrap();
        let second: Value = serde_json::from_str(&sent[1]).unwrap();
        assert_eq!(first["sessionId"], second["sessionId"]);
    }

    #[tokio::test]
    async fn test_session_ids_differ_between_clients() {
        let first = client_over(Arc::new(RecordingTransport::replying(fixtures::success_body())));
        let second = client_over(Arc::new(RecordingTransport::replying(fixtures::success_body())));
        assert_ne!(first.session_id(), second.session_id());
    }

    // ==================== Voice path ====================

    #[tokio::test]
    async fn test_voice_query_sends_audio_and_contexts() {
        let transport = Arc::new(RecordingTransport::replying(fixtures::success_body()));
        let client = client_over(transport.clone());

        let audio: Vec<u8> = (0u8..200).collect();
        let contexts = vec![Context::new("weather").with_parameter("city", "Paris")];
        let response = client
            .voice_query(Cursor::new(audio.clone()), contexts)
            .await
            .unwrap();
        assert!(!response.is_error());

        let sent = transport.sent_voice.lock().unwrap();
        assert_eq!(sent.len(), 1);

        let (body, sent_audio) = &sent[0];
        assert_eq!(sent_audio, &audio);

        let body: Value = serde_json::from_str(body).unwrap();
        // Voice requests carry no query text.
        assert!(body.get("query").is_none());
        assert_eq!(body["contexts"][0]["name"], "weather");
        assert_eq!(body["sessionId"], client.session_id());
    }

    #[tokio::test]
    async fn test_voice_query_failure_taxonomy_matches_text() {
        let client = client_over(Arc::new(RecordingTransport::replying("not-json")));
        let err = client
            .voice_query(Cursor::new(vec![0u8; 16]), Vec::new())
            .await
            .unwrap_err();
        assert!(err.is_decode());
    }

    // ==================== reset_contexts ====================

    #[tokio::test]
    async fn test_reset_contexts_true_on_success() {
        let transport = Arc::new(RecordingTransport::replying(fixtures::success_body()));
        let client = client_over(transport.clone());

        assert!(client.reset_contexts().await);

        let sent = transport.sent_text.lock().unwrap();
        let body: Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(body["query"], "empty_query_for_resetting_contexts");
        assert_eq!(body["resetContexts"], true);
    }

    #[tokio::test]
    async fn test_reset_contexts_false_on_error_status() {
        let transport = Arc::new(RecordingTransport::replying(fixtures::error_body(
            400,
            "badRequest",
        )));
        let client = client_over(transport);
        assert!(!client.reset_contexts().await);
    }

    #[tokio::test]
    async fn test_reset_contexts_swallows_transport_failures() {
        let client = client_over(Arc::new(RecordingTransport::failing("connection refused")));
        assert!(!client.reset_contexts().await);
    }
}
