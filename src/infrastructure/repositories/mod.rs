// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的数据库实现与内存实现
pub mod faculty_repo_impl;
pub mod in_memory_faculty_repo;
pub mod seed_stamp_repo_impl;
