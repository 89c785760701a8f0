//! SPARQL protocol request parameters.

/// Parameter name for the per-request timeout.
pub const TIMEOUT_PARAM: &str = "timeout";

/// Ordered request parameters. Names may repeat.
pub type Params = Vec<(&'static str, String)>;

/// Graphs an operation runs against.
///
/// For queries these become `default-graph-uri` / `named-graph-uri`; for
/// updates `using-graph-uri` / `using-named-graph-uri`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub default_graphs: Vec<String>,
    pub named_graphs: Vec<String>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_graph(mut self, graph: impl Into<String>) -> Self {
        self.default_graphs.push(graph.into());
        self
    }

    pub fn with_named_graph(mut self, graph: impl Into<String>) -> Self {
        self.named_graphs.push(graph.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.default_graphs.is_empty() && self.named_graphs.is_empty()
    }
}

/// Settings shared by every query and update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationSettings {
    pub dataset: Dataset,
    pub include_inferred: bool,
    /// Maximum execution time in seconds; 0 means no limit
    pub max_execution_time: u32,
}

impl Default for OperationSettings {
    fn default() -> Self {
        Self {
            dataset: Dataset::default(),
            include_inferred: true,
            max_execution_time: 0,
        }
    }
}

/// Standard SPARQL protocol parameters for a query.
///
/// The `timeout` parameter is in seconds here; see [`with_store_timeout`].
pub fn query_params(query: &str, settings: &OperationSettings) -> Params {
    let mut params = vec![("query", query.to_string())];
    push_common(
        &mut params,
        settings,
        "default-graph-uri",
        "named-graph-uri",
    );
    params
}

/// Standard SPARQL protocol parameters for an update.
pub fn update_params(update: &str, settings: &OperationSettings) -> Params {
    let mut params = vec![("update", update.to_string())];
    push_common(
        &mut params,
        settings,
        "using-graph-uri",
        "using-named-graph-uri",
    );
    params
}

fn push_common(
    params: &mut Params,
    settings: &OperationSettings,
    default_name: &'static str,
    named_name: &'static str,
) {
    for graph in &settings.dataset.default_graphs {
        params.push((default_name, graph.clone()));
    }
    for graph in &settings.dataset.named_graphs {
        params.push((named_name, graph.clone()));
    }
    params.push(("infer", settings.include_inferred.to_string()));
    if settings.max_execution_time > 0 {
        params.push((TIMEOUT_PARAM, settings.max_execution_time.to_string()));
    }
}

/// Replace every `timeout` parameter with the store's millisecond form.
///
/// Nothing is added when `max_execution_time` (seconds) is zero.
pub fn with_store_timeout(mut params: Params, max_execution_time: u32) -> Params {
    params.retain(|(name, _)| *name != TIMEOUT_PARAM);
    if max_execution_time > 0 {
        let millis = u64::from(max_execution_time) * 1000;
        params.push((TIMEOUT_PARAM, millis.to_string()));
    }
    params
}
