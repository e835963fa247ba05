use async_trait::async_trait;
use mockall::automock;
use tabletime_core::calendar::MonthRef;
use tabletime_core::models::availability::{
    Ack, AvailabilityEntry, BatchRequest, CellChange, CommonCell, MonthResponse,
};
use tabletime_core::models::player::Player;
use tabletime_core::models::time_slot::{
    CommonTime, CommonTimesResponse, GetTimesResponse, SubmitTimeRequest, TimeSlotEntry,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// One month of authoritative server state, tagged with the scope it was
/// requested for so late responses after navigation can be discarded.
#[derive(Debug, Clone)]
pub struct MonthSnapshot {
    pub scope: MonthRef,
    pub entries: Vec<AvailabilityEntry>,
    pub common: Vec<CommonCell>,
}

/// The persistence API as seen by the client state machine. Implemented over
/// HTTP by [`HttpApi`]; mocked in tests.
#[automock]
#[async_trait]
pub trait AvailabilityApi: Send + Sync {
    /// `GET /availability/month` for one scope.
    async fn fetch_month(&self, scope: MonthRef) -> ClientResult<MonthSnapshot>;

    /// `POST /availability/batch`: one player's coalesced cell changes.
    async fn send_batch(&self, player: Player, changes: Vec<CellChange>) -> ClientResult<()>;

    /// `POST /submit-time` (legacy per-interval form).
    async fn submit_time(&self, request: SubmitTimeRequest) -> ClientResult<()>;

    /// `GET /get-times/{room_code}`.
    async fn get_times(&self) -> ClientResult<Vec<TimeSlotEntry>>;

    /// `GET /get-common-times/{room_code}`.
    async fn get_common_times(&self) -> ClientResult<Vec<CommonTime>>;
}

/// reqwest-backed transport. The fixed room code travels on every call.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    room_code: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, room_code: impl Into<String>) -> Self {
        HttpApi {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            room_code: room_code.into(),
        }
    }

    /// Builds the transport from environment-derived settings.
    pub fn from_config(config: &ClientConfig) -> Self {
        HttpApi::new(config.api_base_url.clone(), config.room_code.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn room_code(&self) -> &str {
        &self.room_code
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn check_ack(ack: Ack) -> ClientResult<()> {
    if ack.success {
        Ok(())
    } else {
        Err(ClientError::Rejected(
            ack.error.unwrap_or_else(|| "unknown error".to_string()),
        ))
    }
}

#[async_trait]
impl AvailabilityApi for HttpApi {
    async fn fetch_month(&self, scope: MonthRef) -> ClientResult<MonthSnapshot> {
        let response: MonthResponse = self
            .http
            .get(self.url("availability/month"))
            .query(&[
                ("year", scope.year().to_string()),
                ("month", scope.month().to_string()),
                ("room_code", self.room_code.clone()),
            ])
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(MonthSnapshot {
            scope,
            entries: response.entries,
            common: response.common,
        })
    }

    async fn send_batch(&self, player: Player, changes: Vec<CellChange>) -> ClientResult<()> {
        if changes.is_empty() {
            return Err(ClientError::Input("changes must be non-empty".to_string()));
        }

        let body = BatchRequest {
            room_code: Some(self.room_code.clone()),
            nickname: player.nickname().to_string(),
            changes,
        };

        let ack: Ack = self
            .http
            .post(self.url("availability/batch"))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        check_ack(ack)
    }

    async fn submit_time(&self, mut request: SubmitTimeRequest) -> ClientResult<()> {
        if request.nickname.trim().is_empty() {
            return Err(ClientError::Input("nickname is required".to_string()));
        }
        if request.start_time >= request.end_time {
            return Err(ClientError::Input(
                "end_time must be after start_time".to_string(),
            ));
        }
        if request.room_code.is_none() {
            request.room_code = Some(self.room_code.clone());
        }

        let ack: Ack = self
            .http
            .post(self.url("submit-time"))
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        check_ack(ack)
    }

    async fn get_times(&self) -> ClientResult<Vec<TimeSlotEntry>> {
        let response: GetTimesResponse = self
            .http
            .get(self.url(&format!("get-times/{}", self.room_code)))
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ClientError::Rejected("failed to load times".to_string()));
        }
        Ok(response.times)
    }

    async fn get_common_times(&self) -> ClientResult<Vec<CommonTime>> {
        let response: CommonTimesResponse = self
            .http
            .get(self.url(&format!("get-common-times/{}", self.room_code)))
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                "failed to load common times".to_string(),
            ));
        }
        Ok(response.common_times)
    }
}
