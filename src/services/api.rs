//! Background API worker.
//!
//! All network I/O runs here so the UI loop never blocks on a request.
//! Requests arrive over a channel, wait in a priority queue, and run
//! with bounded concurrency; responses flow back over a second channel
//! and are drained by the main loop each frame.

use log::debug;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{BatchAck, ListQuery, MutationAck, PageEnvelope, Record, RecordsClient};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // Direct user actions (mutations, explicit refresh, page change)
    Medium, // Follow-up refreshes after a mutation
    Low,    // Debounced filter refetches
}

/// Identifier for in-flight bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Fetch { seq: u64 },
    Add,
    Update { id: i64 },
    Delete { id: i64 },
    BatchDelete,
    Import,
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch one page of records. `seq` tags the response so the
    /// handler can discard it if a newer fetch was issued meanwhile.
    FetchPage {
        query: ListQuery,
        seq: u64,
        priority: Priority,
    },

    AddRecord {
        name: String,
        email: String,
    },

    UpdateRecord {
        record: Record,
    },

    DeleteRecord {
        id: i64,
    },

    BatchDelete {
        ids: Vec<i64>,
    },

    ImportCsv {
        path: PathBuf,
    },
}

impl ApiRequest {
    /// Extract priority from request
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::FetchPage { priority, .. } => *priority,
            // Mutations are always direct user actions
            _ => Priority::High,
        }
    }

    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::FetchPage { seq, .. } => RequestKey::Fetch { seq: *seq },
            ApiRequest::AddRecord { .. } => RequestKey::Add,
            ApiRequest::UpdateRecord { record } => RequestKey::Update { id: record.id },
            ApiRequest::DeleteRecord { id } => RequestKey::Delete { id: *id },
            ApiRequest::BatchDelete { .. } => RequestKey::BatchDelete,
            ApiRequest::ImportCsv { .. } => RequestKey::Import,
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    PageResult {
        seq: u64,
        envelope: Result<PageEnvelope, anyhow::Error>,
    },

    AddResult {
        ack: Result<MutationAck, anyhow::Error>,
    },

    UpdateResult {
        id: i64,
        ack: Result<MutationAck, anyhow::Error>,
    },

    DeleteResult {
        id: i64,
        ack: Result<MutationAck, anyhow::Error>,
    },

    BatchDeleteResult {
        ids: Vec<i64>,
        ack: Result<BatchAck, anyhow::Error>,
    },

    ImportResult {
        ack: Result<MutationAck, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: RecordsClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: RecordsClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 4,
        }
    }

    /// Add a request to the queue, ahead of anything lower priority.
    /// Duplicate-submission guarding happens in the model (OpsModel)
    /// before a request is even sent here.
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();

        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    async fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        // Track in-flight for concurrency limiting
        let key = request.key();
        self.in_flight.insert(key.clone());

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();
        let completion_key = key;

        // No per-request retries - every failure is terminal for that
        // user action and surfaces as a toast
        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;

            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed(completion_key));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &RecordsClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchPage { query, seq, .. } => {
                debug!("fetching page {} (seq {})", query.page, seq);
                let envelope = client.fetch_page(&query).await;

                ApiResponse::PageResult { seq, envelope }
            }

            ApiRequest::AddRecord { name, email } => {
                let ack = client.add_record(&name, &email).await;

                ApiResponse::AddResult { ack }
            }

            ApiRequest::UpdateRecord { record } => {
                let id = record.id;
                let ack = client.update_record(&record).await;

                ApiResponse::UpdateResult { id, ack }
            }

            ApiRequest::DeleteRecord { id } => {
                let ack = client.delete_record(id).await;

                ApiResponse::DeleteResult { id, ack }
            }

            ApiRequest::BatchDelete { ids } => {
                let ack = client.batch_delete(&ids).await;

                ApiResponse::BatchDeleteResult { ids, ack }
            }

            ApiRequest::ImportCsv { path } => {
                debug!("uploading CSV {}", path.display());
                let ack = client.import_csv(&path).await;

                ApiResponse::ImportResult { ack }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: RecordsClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                // Handle completion notifications
                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    // Process multiple requests per tick if queue has items
                    for _ in 0..4 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next().await;
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
