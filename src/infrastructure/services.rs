use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Console logger: browser console on wasm, stderr elsewhere
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_log_entry(&self, entry: &LogEntry) -> String {
        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        match &entry.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, entry.level, entry.component, entry.message, metadata
            ),
            None => format!(
                "[{}] {} {} | {}",
                timestamp, entry.level, entry.component, entry.message
            ),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = self.format_log_entry(&entry);

        #[cfg(target_arch = "wasm32")]
        {
            let value = wasm_bindgen::JsValue::from_str(&formatted);
            match entry.level {
                LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&value),
                LogLevel::Info => web_sys::console::info_1(&value),
                LogLevel::Warn => web_sys::console::warn_1(&value),
                LogLevel::Error => web_sys::console::error_1(&value),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", formatted);
    }
}

/// Wall-clock time from `Date.now()`, formatted as local `HH:MM:SS.mmm`
#[derive(Debug, Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogComponent;

    #[test]
    fn entry_formatting_includes_component_and_metadata() {
        let logger = ConsoleLogger::new_development();
        let entry = LogEntry::new_with_metadata(
            LogLevel::Warn,
            LogComponent::Infrastructure("Drawer"),
            "frame dropped",
            "offset=-1",
        );
        let line = logger.format_log_entry(&entry);
        assert!(line.ends_with(" WARN INF:Drawer | frame dropped | offset=-1"), "{}", line);
    }
}
