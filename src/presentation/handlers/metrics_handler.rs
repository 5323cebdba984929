// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use metrics_exporter_prometheus::PrometheusHandle;

/// 以 Prometheus 文本格式输出指标
pub async fn metrics(Extension(handle): Extension<Option<PrometheusHandle>>) -> String {
    handle.map(|h| h.render()).unwrap_or_default()
}
