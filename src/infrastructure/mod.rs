// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 数据库（database）：SQLite 连接和实体映射
/// - 指标（metrics）：Prometheus 记录器
/// - 仓库实现（repositories）：领域仓库接口的具体实现
pub mod database;
pub mod metrics;
pub mod repositories;
