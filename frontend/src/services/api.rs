use gloo::net::http::Request;
use shared::{
    ActiveProfileResponse, CreateEventRequest, CreateEventResponse, EventListResponse,
    StatsSummary, UpdateExerciseConfigRequest, UpdateExerciseConfigResponse,
};

/// API client for the backend that owns the profile store, event store, and
/// stats view-model
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Test connection to the backend
    pub async fn test_connection(&self) -> Result<(), String> {
        match Request::get(&format!("{}/api/profile/active", self.base_url))
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("Connection failed: {}", e)),
        }
    }

    /// Get the currently active puppy profile
    pub async fn get_active_profile(&self) -> Result<ActiveProfileResponse, String> {
        let url = format!("{}/api/profile/active", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<ActiveProfileResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse profile: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch profile: {}", e)),
        }
    }

    /// Replace the active puppy's exercise settings wholesale
    pub async fn update_exercise_config(
        &self,
        request: UpdateExerciseConfigRequest,
    ) -> Result<UpdateExerciseConfigResponse, String> {
        let url = format!("{}/api/profile/exercise-config", self.base_url);

        match Request::put(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<UpdateExerciseConfigResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Inclusive-range event query. Ordering is store-determined; callers
    /// that need chronological order sort on `occurred_at`.
    pub async fn get_events(&self, from: &str, to: &str) -> Result<EventListResponse, String> {
        let url = format!(
            "{}/api/events?from={}&to={}",
            self.base_url,
            js_sys::encode_uri_component(from),
            js_sys::encode_uri_component(to)
        );

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<EventListResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse events: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch events: {}", e)),
        }
    }

    /// Log a new care event
    pub async fn create_event(
        &self,
        request: CreateEventRequest,
    ) -> Result<CreateEventResponse, String> {
        let url = format!("{}/api/events", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<CreateEventResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Get the backend-computed stats summaries for the dashboard
    pub async fn get_stats_summary(&self) -> Result<StatsSummary, String> {
        let url = format!("{}/api/stats/summary", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<StatsSummary>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse stats summary: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch stats summary: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
