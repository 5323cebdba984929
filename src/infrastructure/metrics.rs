// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

/// 安装全局 Prometheus 记录器
///
/// 记录器是进程级的，重复安装会失败；失败时只记录警告并返回 `None`，
/// `/metrics` 端点随之返回空内容。
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            metrics::describe_counter!(
                "faculty_searches_total",
                "Faculty searches executed, per department"
            );
            metrics::describe_counter!(
                "faculty_search_matches_total",
                "Faculty records returned by searches, per department"
            );
            metrics::describe_counter!(
                "faculty_seed_runs_total",
                "Times the faculty directory was (re)loaded from the built-in dataset"
            );
            info!("Prometheus recorder installed");
            Some(handle)
        }
        Err(e) => {
            warn!("Failed to install Prometheus recorder: {}", e);
            None
        }
    }
}
