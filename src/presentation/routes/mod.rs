// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::faculty_repository::FacultyRepository;
use crate::presentation::handlers::{directory_handler, metrics_handler, search_handler};
use axum::{routing::get, Router};

/// 创建应用路由
///
/// 仓库实例与指标句柄通过 `Extension` 层注入。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<R>() -> Router
where
    R: FacultyRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/metrics", get(metrics_handler::metrics));

    let directory_routes = Router::new()
        .route("/", get(directory_handler::index::<R>))
        .route("/api/v1/search", get(search_handler::search::<R>))
        .route("/api/v1/departments", get(search_handler::departments::<R>));

    Router::new().merge(public_routes).merge(directory_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
