//! The create / list / get / update / delete walk-through.

use crate::{ApiResponse, BankClient, ClientError};

/// One step of the walk-through: a label and what the service answered.
#[derive(Debug, Clone)]
pub struct DemoStep {
    pub label: String,
    pub response: ApiResponse,
}

impl DemoStep {
    fn new(label: impl Into<String>, response: ApiResponse) -> Self {
        Self { label: label.into(), response }
    }
}

/// First `id` found in a list response body.
pub fn first_id(list: &ApiResponse) -> Option<String> {
    list.body
        .as_array()?
        .iter()
        .find_map(|b| b.get("id").and_then(|id| id.as_str()).map(str::to_string))
}

/// Create "Bank A" in London, list, then get/update/delete one bank: either
/// `bank_id` or the first one listed. Steps are returned in call order.
pub async fn run(client: &BankClient, bank_id: Option<String>) -> Result<Vec<DemoStep>, ClientError> {
    let mut steps = Vec::with_capacity(5);

    steps.push(DemoStep::new("Created", client.create("Bank A", "London").await?));

    let all = client.list().await?;
    let bank_id = match bank_id {
        Some(id) => id,
        None => first_id(&all).ok_or(ClientError::NoBank)?,
    };
    steps.push(DemoStep::new("All Banks", all));

    steps.push(DemoStep::new(
        format!("Details for bank with id: {bank_id}"),
        client.get(&bank_id).await?,
    ));
    steps.push(DemoStep::new(
        format!("Updated bank with id: {bank_id}"),
        client.update(&bank_id, "Updated Bank", "Paris").await?,
    ));
    steps.push(DemoStep::new(
        format!("Deleted bank with id: {bank_id}"),
        client.delete(&bank_id).await?,
    ));

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use serde_json::{json, Value};

    #[test]
    fn first_id_reads_list_bodies() {
        let list = ApiResponse { status: 200, body: json!([{"id": "a", "name": "n", "location": "l"}, {"id": "b"}]) };
        assert_eq!(first_id(&list), Some("a".to_string()));

        let empty = ApiResponse { status: 200, body: json!([]) };
        assert_eq!(first_id(&empty), None);
    }

    async fn stub_server(list_body: Value) -> anyhow::Result<String> {
        let app = Router::new()
            .route(
                "/api/banks",
                get(move || {
                    let body = list_body.clone();
                    async move { Json(body) }
                })
                .post(|| async { Json(json!({"message": "Bank created successfully"})) }),
            )
            .route(
                "/api/banks/:id",
                get(|| async { Json(json!({"id": "x", "name": "Bank A", "location": "London"})) })
                    .put(|| async { Json(json!({"id": "x", "name": "Updated Bank", "location": "Paris"})) })
                    .delete(|| async { Json(json!({"message": "Bank deleted successfully"})) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(format!("http://{addr}/api/banks"))
    }

    #[tokio::test]
    async fn demo_walks_every_endpoint() -> anyhow::Result<()> {
        let base = stub_server(json!([{"id": "x", "name": "Bank A", "location": "London"}])).await?;
        let steps = run(&BankClient::new(base), None).await?;

        let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Created",
                "All Banks",
                "Details for bank with id: x",
                "Updated bank with id: x",
                "Deleted bank with id: x",
            ]
        );
        assert!(steps.iter().all(|s| s.response.is_success()));
        assert_eq!(steps[3].response.body["name"], "Updated Bank");
        Ok(())
    }

    #[tokio::test]
    async fn demo_without_banks_or_id_stops() -> anyhow::Result<()> {
        let base = stub_server(json!([])).await?;
        let err = run(&BankClient::new(base), None).await.unwrap_err();
        assert!(matches!(err, ClientError::NoBank));
        Ok(())
    }
}
