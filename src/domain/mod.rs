// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 内置数据（dataset）：两个院系的教师名录
/// - 领域模型（models）：教师记录、院系与查询条件
/// - 仓库接口（repositories）：名录存储的抽象接口
/// - 服务（services）：按专业方向检索教师
///
/// 领域层不依赖于任何外部实现。
pub mod dataset;
pub mod models;
pub mod repositories;
pub mod services;
