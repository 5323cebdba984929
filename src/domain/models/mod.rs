// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 教师（faculty）：教师记录、院系代码与检索条件
/// - 装载标记（seed_stamp）：最近一次装载的数据集版本
pub mod faculty;
pub mod seed_stamp;
