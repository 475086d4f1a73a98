#![allow(dead_code)]

use axum::Router;
use axum::http::{StatusCode, Uri};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A throwaway HTTP server standing in for the payment or survey service.
pub struct FakeUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeUpstream {
    /// Paths requested so far, in arrival order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Answers every request with `status` and `body`.
pub async fn spawn_upstream(status: StatusCode, body: &str) -> FakeUpstream {
    spawn_delayed_upstream(status, body, Duration::ZERO).await
}

/// Like [`spawn_upstream`] but waits `delay` before answering.
pub async fn spawn_delayed_upstream(status: StatusCode, body: &str, delay: Duration) -> FakeUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    let body = body.to_string();

    let app = Router::new().fallback(move |uri: Uri| {
        let recorded = Arc::clone(&recorded);
        let body = body.clone();
        async move {
            recorded.lock().unwrap().push(uri.path().to_string());
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            (status, body)
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        base_url: format!("http://{addr}/"),
        requests,
    }
}

/// An address nothing listens on.
pub async fn closed_address() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// The three payments used across the report tests, keyed the way the payment service sends them.
pub const THREE_PAYMENTS: &str = r#"[
    {
        "Id": "11111111-0000-0000-0000-000000000001",
        "IdEvento": "aaaaaaaa-0000-0000-0000-000000000001",
        "IdUsuario": "bbbbbbbb-0000-0000-0000-000000000001",
        "MontoPago": { "montoPago": 100 },
        "CreatedAt": "2025-01-01T10:00:00",
        "UltimosDigitosTarjeta": "1234",
        "TipoMedioDePago": "CreditCard"
    },
    {
        "id": "11111111-0000-0000-0000-000000000002",
        "eventId": "aaaaaaaa-0000-0000-0000-000000000001",
        "userId": "bbbbbbbb-0000-0000-0000-000000000002",
        "amount": { "montoPago": 50 },
        "createdAt": "2025-01-01T11:00:00Z",
        "cardLastDigits": "5678",
        "paymentMethodType": "DebitCard"
    },
    {
        "ID": "11111111-0000-0000-0000-000000000003",
        "EVENTID": "aaaaaaaa-0000-0000-0000-000000000001",
        "USERID": "bbbbbbbb-0000-0000-0000-000000000003",
        "AMOUNT": { "MONTOPAGO": 200 },
        "CREATEDAT": "2025-01-02T12:00:00+00:00",
        "CARDLASTDIGITS": "9999",
        "PAYMENTMETHODTYPE": "Paypal"
    }
]"#;

pub const SURVEY_AVERAGES: &str = r#"{
    "EventoId": "aaaaaaaa-0000-0000-0000-000000000001",
    "SurveyId": "cccccccc-0000-0000-0000-000000000001",
    "SurveyTitle": "Satisfacción del Evento",
    "QuestionsStats": [
        {
            "QuestionId": "dddddddd-0000-0000-0000-000000000001",
            "QuestionText": "¿Qué tal el sonido?",
            "PromedioCalculado": 4.5,
            "CantidadRespuestas": 10
        },
        {
            "questionId": "dddddddd-0000-0000-0000-000000000002",
            "questionText": "¿Volverías?",
            "computedAverage": 3.25,
            "responseCount": 4
        }
    ]
}"#;
