use gloo::net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Serialize)]
struct LogRequest {
    level: &'static str,
    message: String,
    component: Option<String>,
}

/// Ships structured log lines to the backend. Fire-and-forget: a log that
/// fails to send is dropped, never retried.
pub struct Logger;

impl Logger {
    pub fn debug(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        let request = LogRequest {
            level: level.as_str(),
            message: message.to_string(),
            component: Some(component.to_string()),
        };

        spawn_local(async move {
            if let Ok(req) = Request::post("http://localhost:3000/api/logs").json(&request) {
                let _ = req.send().await;
            }
        });
    }
}
