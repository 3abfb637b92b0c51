//! Chart Renderer
//!
//! 現在のチャートインスタンスを1つだけ所有し、再描画時は破棄してから生成する

use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;

use crate::domain::entities::chart_spec::LineChartSpec;
use crate::domain::repositories::chart_backend::{ChartBackend, ChartInstance};

/// チャートレンダラー
pub struct ChartRenderer<B: ChartBackend> {
    backend: Arc<B>,
    current: Option<Box<dyn ChartInstance>>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// チャートを描画
    ///
    /// 以前のインスタンスを破棄してから新しいインスタンスを生成する。
    /// 生成に失敗した場合、アクティブなチャートは残らない
    ///
    /// # Returns
    ///
    /// 新しいチャートの出力先
    pub fn render(&mut self, spec: &LineChartSpec) -> Result<&str> {
        self.dispose()?;

        let instance = self
            .backend
            .construct(spec)
            .context("Failed to construct chart")?;
        debug!(
            "Chart constructed at {} ({} points)",
            instance.location(),
            spec.len()
        );

        Ok(self.current.insert(instance).location())
    }

    /// 現在のチャートを破棄
    pub fn dispose(&mut self) -> Result<()> {
        if let Some(previous) = self.current.take() {
            debug!("Destroying chart at {}", previous.location());
            previous
                .destroy()
                .context("Failed to destroy previous chart")?;
        }
        Ok(())
    }

    /// アクティブなチャートがあるかどうか
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_location(&self) -> Option<&str> {
        self.current.as_deref().map(|c| c.location())
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    use anyhow::{bail, Result};

    use super::*;

    /// 生成・破棄の順序を記録するバックエンド（テスト用）
    #[derive(Default)]
    pub(crate) struct RecordingBackend {
        pub(crate) events: Arc<Mutex<Vec<String>>>,
        pub(crate) next_id: AtomicU64,
        pub(crate) fail_construct: bool,
    }

    impl RecordingBackend {
        pub(crate) fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        /// 生きているインスタンス数（生成数 - 破棄数）
        pub(crate) fn alive(&self) -> usize {
            let events = self.events();
            let constructed = events.iter().filter(|e| e.starts_with("construct")).count();
            let destroyed = events.iter().filter(|e| e.starts_with("destroy")).count();
            constructed - destroyed
        }
    }

    struct RecordingInstance {
        location: String,
        events: Arc<Mutex<Vec<String>>>,
    }

    impl ChartInstance for RecordingInstance {
        fn location(&self) -> &str {
            &self.location
        }

        fn destroy(self: Box<Self>) -> Result<()> {
            self.events
                .lock()
                .unwrap()
                .push(format!("destroy {}", self.location));
            Ok(())
        }
    }

    impl ChartBackend for RecordingBackend {
        fn construct(&self, spec: &LineChartSpec) -> Result<Box<dyn ChartInstance>> {
            if self.fail_construct {
                bail!("backend unavailable");
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let location = format!("chart-{}", id);
            self.events
                .lock()
                .unwrap()
                .push(format!("construct {} ({} points)", location, spec.len()));
            Ok(Box::new(RecordingInstance {
                location,
                events: self.events.clone(),
            }))
        }
    }
}
