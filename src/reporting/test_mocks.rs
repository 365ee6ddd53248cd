// テスト用のレポーターモック実装
// 受け取ったイベントを順番どおりに記録する

use super::traits::CommandReporter;
use crate::model::{CommandError, ExpressionWarning};

/// 記録されたイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Search {
        column: Option<String>,
        values: Vec<String>,
    },
    Update {
        old_column: Option<String>,
        old_values: Vec<String>,
        new_values: Vec<String>,
    },
    Copy {
        source_key: String,
        target_key: String,
    },
    Warning(ExpressionWarning),
    Error(String),
    Help,
    Clear,
}

pub struct RecordingReporter {
    pub events: std::sync::Arc<std::sync::Mutex<Vec<ReportedEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            events: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<ExpressionWarning> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Warning(warning) => Some(warning),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl CommandReporter for RecordingReporter {
    fn report_search(&self, column: Option<&str>, values: &[String]) {
        self.push(ReportedEvent::Search {
            column: column.map(str::to_string),
            values: values.to_vec(),
        });
    }

    fn report_update(&self, old_column: Option<&str>, old_values: &[String], new_values: &[String]) {
        self.push(ReportedEvent::Update {
            old_column: old_column.map(str::to_string),
            old_values: old_values.to_vec(),
            new_values: new_values.to_vec(),
        });
    }

    fn report_copy(&self, source_key: &str, target_key: &str) {
        self.push(ReportedEvent::Copy {
            source_key: source_key.to_string(),
            target_key: target_key.to_string(),
        });
    }

    fn report_warning(&self, warning: &ExpressionWarning) {
        self.push(ReportedEvent::Warning(warning.clone()));
    }

    fn report_error(&self, error: &CommandError) {
        self.push(ReportedEvent::Error(error.to_string()));
    }

    fn show_help(&self) {
        self.push(ReportedEvent::Help);
    }

    fn clear_screen(&self) {
        self.push(ReportedEvent::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_keeps_order() {
        let reporter = RecordingReporter::new();

        reporter.report_warning(&ExpressionWarning::invalid_range("a-b"));
        reporter.report_search(Some("ID"), &["1".to_string()]);
        reporter.report_error(&CommandError::unrecognized("drop"));
        reporter.show_help();

        let events = reporter.events();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[1],
            ReportedEvent::Search {
                column: Some("ID".to_string()),
                values: vec!["1".to_string()],
            }
        );
        assert_eq!(events[3], ReportedEvent::Help);
        assert_eq!(reporter.warnings().len(), 1);
        assert!(reporter.errors()[0].contains("drop"));
    }
}
