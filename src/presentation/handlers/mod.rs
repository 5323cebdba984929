// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 包含各个端点的具体处理逻辑
pub mod directory_handler;
pub mod metrics_handler;
pub mod search_handler;
