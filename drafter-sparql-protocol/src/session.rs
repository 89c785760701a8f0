//! SPARQL protocol session.
//!
//! A session sends one request per operation against a query and an update
//! endpoint, choosing GET or POST by query length and classifying the
//! response before anything is handed back.

use crate::classify::{classify_failure, is_success, ERROR_CODE_HEADER};
use crate::error::{InterruptReason, ProtocolError, Result};
use crate::params::{query_params, update_params, with_store_timeout, OperationSettings, Params};
use crate::results::{
    parse_boolean, GraphQueryResult, TupleQueryResult, N_TRIPLES, SPARQL_RESULTS_JSON,
    TEXT_BOOLEAN,
};
use crate::transport::Transport;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response};
use std::sync::Arc;
use tokio::sync::OwnedSemaphorePermit;
use tracing::{debug, warn, Instrument};
use url::Url;

/// Longest query (in characters) sent as a GET request.
pub const MAX_URL_QUERY_LENGTH: usize = 4083;

/// Whether `query` is too long for a GET request.
pub fn should_use_post(query: &str) -> bool {
    query.chars().count() > MAX_URL_QUERY_LENGTH
}

/// Creates sessions that share one transport and its connection pool.
#[derive(Debug)]
pub struct SessionFactory {
    transport: Arc<Transport>,
}

impl SessionFactory {
    pub fn new(transport: Transport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn create_session(&self, query_url: Url, update_url: Url) -> SparqlSession {
        SparqlSession {
            transport: Arc::clone(&self.transport),
            query_url,
            update_url,
        }
    }

    pub fn max_connections(&self) -> usize {
        self.transport.max_connections()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

#[derive(Clone, Debug)]
pub struct SparqlSession {
    transport: Arc<Transport>,
    query_url: Url,
    update_url: Url,
}

impl SparqlSession {
    pub fn query_url(&self) -> &Url {
        &self.query_url
    }

    pub fn update_url(&self) -> &Url {
        &self.update_url
    }

    pub async fn send_boolean_query(&self, query: &str, settings: &OperationSettings) -> Result<bool> {
        let accept = format!("{SPARQL_RESULTS_JSON}, {TEXT_BOOLEAN}");
        let (response, _permit) = self.send_query("boolean", query, settings, &accept).await?;
        let content_type = content_type(&response);
        let body = response.text().await?;
        parse_boolean(content_type.as_deref(), &body)
    }

    pub async fn send_tuple_query(
        &self,
        query: &str,
        settings: &OperationSettings,
    ) -> Result<TupleQueryResult> {
        let (response, permit) = self
            .send_query("tuple", query, settings, SPARQL_RESULTS_JSON)
            .await?;
        let body = response.bytes().await?;
        drop(permit);
        TupleQueryResult::spawn(body).await
    }

    pub async fn send_graph_query(
        &self,
        query: &str,
        settings: &OperationSettings,
    ) -> Result<GraphQueryResult> {
        let (response, permit) = self.send_query("graph", query, settings, N_TRIPLES).await?;
        let body = response.bytes().await?;
        drop(permit);
        Ok(GraphQueryResult::spawn(body))
    }

    /// Send an update. Updates are always POSTed.
    pub async fn send_update(&self, update: &str, settings: &OperationSettings) -> Result<()> {
        let params = with_store_timeout(update_params(update, settings), settings.max_execution_time);
        let (response, _permit) = self
            .dispatch("update", Method::POST, &self.update_url, params, None)
            .await?;
        // drain before the permit is released
        response.bytes().await?;
        Ok(())
    }

    async fn send_query(
        &self,
        kind: &'static str,
        query: &str,
        settings: &OperationSettings,
        accept: &str,
    ) -> Result<(Response, OwnedSemaphorePermit)> {
        let params = with_store_timeout(query_params(query, settings), settings.max_execution_time);
        let method = if should_use_post(query) {
            Method::POST
        } else {
            Method::GET
        };
        self.dispatch(kind, method, &self.query_url, params, Some(accept))
            .await
    }

    async fn dispatch(
        &self,
        kind: &'static str,
        method: Method,
        url: &Url,
        params: Params,
        accept: Option<&str>,
    ) -> Result<(Response, OwnedSemaphorePermit)> {
        let span = tracing::debug_span!("sparql_request", kind, method = %method, url = %url);

        async move {
            let permit = self.acquire().await?;

            let mut request = self.transport.client.request(method.clone(), url.clone());
            request = if method == Method::POST {
                request.form(&params)
            } else {
                request.query(&params)
            };
            if let Some(accept) = accept {
                request = request.header(ACCEPT, accept);
            }
            let request = self.transport.authorize(request);

            let response = request.send().await?;
            let status = response.status();
            debug!(status = status.as_u16(), "response received");

            if is_success(status) {
                return Ok((response, permit));
            }

            let error_code = response
                .headers()
                .get(ERROR_CODE_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "failed to read error response body");
                    String::new()
                }
            };
            drop(permit);

            let err = classify_failure(status, error_code.as_deref(), &body);
            debug!(error = %err, "request failed");
            Err(err)
        }
        .instrument(span)
        .await
    }

    async fn acquire(&self) -> Result<OwnedSemaphorePermit> {
        let permits = Arc::clone(&self.transport.permits);
        match tokio::time::timeout(self.transport.pool_wait, permits.acquire_owned()).await {
            Ok(Ok(permit)) => Ok(permit),
            Ok(Err(_closed)) => Err(ProtocolError::Transport(
                "connection pool closed".to_string(),
            )),
            Err(_elapsed) => Err(ProtocolError::interrupted(
                InterruptReason::PoolExhausted,
                format!(
                    "no connection available within {}ms",
                    self.transport.pool_wait.as_millis()
                ),
            )),
        }
    }
}

fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
