// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// SQLite 连接池与 SeaORM 实体定义
pub mod connection;
pub mod entities;
